//! Invocation core.
//!
//! This module contains:
//! - Dispatcher: executor registry, resolution, and the blessing fix-up
//! - Response: atomic response-file writing
//! - Runner: the single-invocation driver tying the codecs together

pub mod dispatcher;
pub mod response;
pub mod runner;

// Re-export commonly used types
pub use dispatcher::{dispatch, ExecutorRegistry, BLESSING_KEY};
pub use response::write_response;
pub use runner::run_invocation;

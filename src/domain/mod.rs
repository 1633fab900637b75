//! Domain types for the invocation protocol.
//!
//! This module contains the core data structures:
//! - Artifact: references to data consumed and produced by a step
//! - Invocation: the request/response wire payloads
//! - Execution: the result object shared with the metadata store

pub mod artifact;
pub mod execution;
pub mod invocation;

use std::collections::BTreeMap;

// Re-export commonly used types
pub use artifact::{ArtifactRecord, PropertyValue, WireArtifact};
pub use execution::{ExecutionRecord, ExecutionResult};
pub use invocation::{InvocationRequest, InvocationResponse, WireParameter};

/// Logical name -> ordered artifacts, as step executors consume and produce it
pub type ArtifactMap = BTreeMap<String, Vec<ArtifactRecord>>;

/// Parameter name -> typed scalar value
pub type ParameterMap = BTreeMap<String, PropertyValue>;

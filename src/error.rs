//! Error taxonomy for a single container invocation.
//!
//! Nothing in this crate retries: every error aborts the remaining stages
//! and the process reports failure to its supervisor. Either a full
//! response file is written or none is.

use thiserror::Error;

/// Errors surfaced by the invocation protocol
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Malformed or incomplete wire data
    #[error("schema violation: {0}")]
    Schema(String),

    /// The executor name does not map to a registered implementation
    #[error("no executor registered under '{name}'")]
    Resolution { name: String },

    /// The step implementation failed; the original cause is preserved
    /// unmodified so the orchestrator can inspect it
    #[error("executor '{name}' failed")]
    StepExecution {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// An artifact identity was produced that the orchestrator never issued
    #[error("unknown artifact identity: {0}")]
    Identity(String),

    /// The reserved result property has not been recorded yet
    #[error("execution record has no '{key}' custom property")]
    NotFound { key: String },

    /// A request or response file could not be read, prepared, or written
    #[error("io failure at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, InvokeError>;

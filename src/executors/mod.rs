//! The pluggable step-executor seam.
//!
//! Step implementations are opaque to this crate: they satisfy a single
//! synchronous contract, mutate their outputs in place, and raise on
//! failure. Business logic (training, conversion, batch prediction) lives
//! behind this trait and is registered by name at process start.

pub mod noop;

use anyhow::Result;
use uuid::Uuid;

use crate::domain::{ArtifactMap, ParameterMap};

// Re-export the no-op executor
pub use noop::NoOpExecutor;

/// Per-invocation context handed to a step executor.
///
/// Carries pass-through configuration only. One process handles exactly one
/// invocation, so nothing here is shared across invocations.
#[derive(Debug, Clone)]
pub struct ExecutorContext {
    /// Unique id for this invocation
    pub unique_id: String,

    /// Extra command-line arguments forwarded verbatim from the entrypoint,
    /// uninterpreted by the core
    pub extra_args: Vec<String>,
}

impl ExecutorContext {
    /// Create a fresh context for one invocation
    pub fn new(extra_args: Vec<String>) -> Self {
        Self {
            unique_id: Uuid::new_v4().to_string(),
            extra_args,
        }
    }
}

/// Contract every step implementation satisfies.
///
/// `run` executes synchronously; the dispatcher waits for it to return or
/// fail and never retries. Results are reported by mutating the artifact
/// records in `outputs`.
pub trait StepExecutor {
    /// Execute the step against decoded inputs, outputs, and parameters
    fn run(
        &self,
        inputs: &ArtifactMap,
        outputs: &mut ArtifactMap,
        parameters: &ParameterMap,
    ) -> Result<()>;
}

/// Factory constructing one executor for one invocation
pub type ExecutorFactory = Box<dyn Fn(ExecutorContext) -> Box<dyn StepExecutor>>;

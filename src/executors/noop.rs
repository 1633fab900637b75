//! A step executor that does nothing.
//!
//! Useful for exercising the invocation path end to end: the response then
//! contains exactly the placeholder artifacts from the request, ids echoed
//! unchanged.

use anyhow::Result;

use crate::domain::{ArtifactMap, ParameterMap};

use super::{ExecutorContext, StepExecutor};

/// Executor that leaves its outputs untouched
pub struct NoOpExecutor;

impl NoOpExecutor {
    /// Fully-qualified name the no-op executor is registered under
    pub const NAME: &'static str = "stepbox.executors.NoOp";

    /// Construct for one invocation; the context is accepted for contract
    /// symmetry and ignored
    pub fn new(_context: ExecutorContext) -> Self {
        Self
    }
}

impl StepExecutor for NoOpExecutor {
    fn run(
        &self,
        _inputs: &ArtifactMap,
        _outputs: &mut ArtifactMap,
        _parameters: &ParameterMap,
    ) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_noop_leaves_outputs_untouched() {
        let executor = NoOpExecutor::new(ExecutorContext::new(vec![]));
        let inputs: ArtifactMap = BTreeMap::new();
        let mut outputs: ArtifactMap = BTreeMap::new();
        outputs.insert("model".to_string(), vec![]);
        let parameters: ParameterMap = BTreeMap::new();

        executor.run(&inputs, &mut outputs, &parameters).unwrap();

        assert_eq!(outputs.len(), 1);
        assert!(outputs["model"].is_empty());
    }
}

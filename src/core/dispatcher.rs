//! Executor resolution and dispatch.
//!
//! Resolution goes through an explicit registry populated at process start:
//! a mapping from fully-qualified name to a factory, with a capability flag
//! marking evaluator-family executors. This keeps step implementations
//! pluggable without runtime reflection or dynamic imports.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::codec::IdRegistry;
use crate::domain::{ArtifactMap, ArtifactRecord, ParameterMap, PropertyValue};
use crate::error::{InvokeError, Result};
use crate::executors::{ExecutorContext, ExecutorFactory, NoOpExecutor, StepExecutor};

/// Reserved output name holding a model-blessing artifact
pub const BLESSING_KEY: &str = "blessing";

/// Blessing properties that reference other artifacts by transient id.
/// The allow-list is deliberately closed: the fix-up applies to the
/// evaluator family only.
const MODEL_REFERENCE_PROPERTIES: [&str; 2] = ["current_model", "blessed_model"];

struct RegistryEntry {
    factory: ExecutorFactory,
    evaluator: bool,
}

/// Registry of constructible step executors, keyed by fully-qualified name
#[derive(Default)]
pub struct ExecutorRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl ExecutorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the executors this crate ships
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NoOpExecutor::NAME, |context| {
            Box::new(NoOpExecutor::new(context))
        });
        registry
    }

    /// Register an executor under a fully-qualified name
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(ExecutorContext) -> Box<dyn StepExecutor> + 'static,
    {
        self.insert(name, factory, false);
    }

    /// Register an evaluator-family executor.
    ///
    /// The flag entitles the entry to the blessing identity fix-up after a
    /// successful run; nothing else changes.
    pub fn register_evaluator<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(ExecutorContext) -> Box<dyn StepExecutor> + 'static,
    {
        self.insert(name, factory, true);
    }

    fn insert<F>(&mut self, name: &str, factory: F, evaluator: bool)
    where
        F: Fn(ExecutorContext) -> Box<dyn StepExecutor> + 'static,
    {
        self.entries.insert(
            name.to_string(),
            RegistryEntry {
                factory: Box::new(factory),
                evaluator,
            },
        );
    }

    /// Whether a name resolves to a registered executor
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// Resolve `step_name`, run the executor, and finalize its outputs.
///
/// Outputs are mutated in place through the artifact records passed in. Any
/// failure raised by the implementation propagates unmodified, wrapped as a
/// step-execution error; there is no local retry.
pub fn dispatch(
    registry: &ExecutorRegistry,
    step_name: &str,
    inputs: &ArtifactMap,
    outputs: &mut ArtifactMap,
    parameters: &ParameterMap,
    ids: &IdRegistry,
    extra_args: &[String],
) -> Result<()> {
    let entry = registry
        .entries
        .get(step_name)
        .ok_or_else(|| InvokeError::Resolution {
            name: step_name.to_string(),
        })?;

    let context = ExecutorContext::new(extra_args.to_vec());
    info!(
        executor = step_name,
        invocation = %context.unique_id,
        "Starting executor"
    );

    let executor = (entry.factory)(context);
    executor
        .run(inputs, outputs, parameters)
        .map_err(|source| InvokeError::StepExecution {
            name: step_name.to_string(),
            source,
        })?;

    // The one documented special case: evaluator blessings reference models
    // by transient numeric id, which the metadata store cannot resolve.
    if entry.evaluator {
        if let Some(artifacts) = outputs.get_mut(BLESSING_KEY).filter(|a| !a.is_empty()) {
            refactor_blessing(artifacts, ids)?;
        }
    }

    debug!(executor = step_name, "Executor finished");
    Ok(())
}

/// Rewrite the blessing artifact's model references from transient ids to
/// durable names using the id registry built at parse time.
fn refactor_blessing(artifacts: &mut [ArtifactRecord], ids: &IdRegistry) -> Result<()> {
    if artifacts.len() != 1 {
        return Err(InvokeError::Schema(format!(
            "output '{BLESSING_KEY}' must contain exactly one artifact, found {}",
            artifacts.len()
        )));
    }
    let blessing = &mut artifacts[0];

    for key in MODEL_REFERENCE_PROPERTIES {
        let Some(PropertyValue::Int(id)) = blessing.properties.get(key).cloned() else {
            continue;
        };
        let name = ids.name(id).ok_or_else(|| {
            InvokeError::Identity(format!(
                "blessing property '{key}' references unregistered artifact id {id}"
            ))
        })?;
        debug!(property = key, id, name, "Rewriting blessing model reference");
        blessing
            .properties
            .insert(key.to_string(), PropertyValue::Str(name.to_string()));
    }

    Ok(())
}

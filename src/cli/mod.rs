//! Command-line surface of the container entrypoint.
//!
//! The process contract mirrors the orchestrator side: two required named
//! arguments select the executor and carry the serialized request, and any
//! trailing arguments are forwarded verbatim to the executor's context.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::{run_invocation, ExecutorRegistry};
use crate::domain::InvocationRequest;

/// stepbox - run one pipeline step inside a container and report back
#[derive(Parser, Debug)]
#[command(name = "stepbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fully-qualified name of the step executor to run
    #[arg(long)]
    pub executor: String,

    /// JSON-serialized invocation request, inline or a path to a file
    /// containing it
    #[arg(long)]
    pub invocation_args: String,

    /// Remaining arguments, forwarded uninterpreted to the executor context
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub passthrough: Vec<String>,
}

impl Cli {
    /// Execute one invocation end to end
    pub fn execute(&self, registry: &ExecutorRegistry) -> Result<()> {
        let request = self.load_request()?;
        run_invocation(registry, &self.executor, &request, &self.passthrough)
            .with_context(|| format!("Invocation of '{}' failed", self.executor))
    }

    /// Inline payloads start with '{'; anything else is a file path
    fn load_request(&self) -> Result<InvocationRequest> {
        let raw = self.invocation_args.trim_start();
        let request = if raw.starts_with('{') {
            InvocationRequest::from_json(raw)
        } else {
            InvocationRequest::from_file(Path::new(&self.invocation_args))
        };
        request.context("Failed to load invocation request")
    }
}

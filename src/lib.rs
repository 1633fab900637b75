//! stepbox - Container entrypoint protocol for pipeline step executors
//!
//! A distributed pipeline orchestrator cannot call step logic directly; it
//! serializes a step's inputs, outputs, and parameters into a request,
//! launches a container that runs this crate, and later reads the response
//! file to continue the pipeline.
//!
//! # Architecture
//!
//! One process handles exactly one invocation, synchronously:
//! - The request is decoded once and immutable afterwards
//! - Decoding builds an id->name registry consulted (never recomputed)
//!   when the response is encoded, so orchestrator-assigned artifact ids
//!   round-trip exactly
//! - The executor is resolved through an explicit registry populated at
//!   process start, no runtime reflection
//! - Either a full response file is written or none is
//!
//! # Modules
//!
//! - `codec`: artifact, parameter, and execution-result codecs
//! - `core`: dispatcher, response writer, invocation driver
//! - `domain`: wire payloads and artifact/execution records
//! - `executors`: the pluggable step-executor contract
//! - `cli`: the process entry contract
//!
//! # Usage
//!
//! ```bash
//! stepbox --executor my.pipeline.Trainer \
//!     --invocation-args /tmp/request.json \
//!     --runner=direct
//! ```

pub mod cli;
pub mod codec;
pub mod core;
pub mod domain;
pub mod error;
pub mod executors;

// Re-export main types at crate root for convenience
pub use codec::{
    decode_artifacts, decode_parameters, encode_artifacts, get_result, set_result, IdRegistry,
    EXECUTION_RESULT_KEY,
};
pub use core::{dispatch, run_invocation, write_response, ExecutorRegistry, BLESSING_KEY};
pub use domain::{
    ArtifactMap, ArtifactRecord, ExecutionRecord, ExecutionResult, InvocationRequest,
    InvocationResponse, ParameterMap, PropertyValue, WireArtifact, WireParameter,
};
pub use error::{InvokeError, Result};
pub use executors::{ExecutorContext, NoOpExecutor, StepExecutor};

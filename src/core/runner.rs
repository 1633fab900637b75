//! End-to-end driver for one invocation.
//!
//! One process handles exactly one request: decode, dispatch, write the
//! response. The first error aborts the remaining stages; nothing is
//! retried, and no partial response file is ever produced.

use std::path::Path;

use tracing::info;

use crate::codec::{decode_artifacts, decode_parameters, IdRegistry};
use crate::core::{dispatch, write_response, ExecutorRegistry};
use crate::domain::InvocationRequest;
use crate::error::Result;

/// Run `step_name` against `request` and write the response file named by
/// the request.
pub fn run_invocation(
    registry: &ExecutorRegistry,
    step_name: &str,
    request: &InvocationRequest,
    extra_args: &[String],
) -> Result<()> {
    // The id registry is mutated only while the request is decoded and
    // read-only for the rest of the invocation.
    let mut ids = IdRegistry::new();
    let inputs = decode_artifacts(&request.inputs, &mut ids)?;
    let mut outputs = decode_artifacts(&request.outputs, &mut ids)?;
    let parameters = decode_parameters(&request.parameters)?;

    info!(
        executor = step_name,
        inputs = inputs.len(),
        outputs = outputs.len(),
        parameters = parameters.len(),
        artifacts = ids.len(),
        "Decoded invocation request"
    );

    dispatch(
        registry,
        step_name,
        &inputs,
        &mut outputs,
        &parameters,
        &ids,
        extra_args,
    )?;

    write_response(&outputs, &ids, Path::new(&request.output_file))
}

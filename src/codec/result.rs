//! Execution result codec.
//!
//! The execution record belongs to the external metadata store; this codec
//! touches exactly one reserved custom-property key on it. Absence of that
//! key means "no result has been recorded yet," which callers must be able
//! to tell apart from "result recorded with code 0."

use crate::domain::{ExecutionRecord, ExecutionResult, PropertyValue};
use crate::error::{InvokeError, Result};

/// Reserved custom-property key carrying the serialized execution result
pub const EXECUTION_RESULT_KEY: &str = "execution_result";

/// Serialize `result` and store it under the reserved key, overwriting any
/// previous value. Calling twice with the same result yields the same
/// stored bytes.
pub fn set_result(result: &ExecutionResult, record: &mut ExecutionRecord) -> Result<()> {
    let encoded = serde_json::to_string(result)
        .map_err(|e| InvokeError::Schema(format!("failed to encode execution result: {e}")))?;

    record
        .custom_properties
        .insert(EXECUTION_RESULT_KEY.to_string(), PropertyValue::Str(encoded));
    Ok(())
}

/// Read back the execution result recorded on `record`.
///
/// Fails with a not-found error when the reserved key is absent.
pub fn get_result(record: &ExecutionRecord) -> Result<ExecutionResult> {
    let value = record
        .custom_properties
        .get(EXECUTION_RESULT_KEY)
        .ok_or_else(|| InvokeError::NotFound {
            key: EXECUTION_RESULT_KEY.to_string(),
        })?;

    let PropertyValue::Str(encoded) = value else {
        return Err(InvokeError::Schema(format!(
            "'{EXECUTION_RESULT_KEY}' property is not a string"
        )));
    };

    serde_json::from_str(encoded)
        .map_err(|e| InvokeError::Schema(format!("malformed execution result: {e}")))
}

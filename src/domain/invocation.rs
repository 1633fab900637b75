//! The wire payloads at the process boundary.
//!
//! An `InvocationRequest` is constructed once per process from the serialized
//! payload, immutable after construction, and discarded at exit. The
//! `InvocationResponse` is built once, written once, never mutated after
//! writing.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InvokeError, Result};

use super::WireArtifact;

/// One parameter in wire format; exactly one field must be populated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int_value: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
}

/// The deserialized unit of work for one invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// Logical input name -> artifact descriptors
    #[serde(default)]
    pub inputs: BTreeMap<String, Vec<WireArtifact>>,

    /// Logical output name -> placeholder descriptors naming where results
    /// must be written (no result data yet)
    #[serde(default)]
    pub outputs: BTreeMap<String, Vec<WireArtifact>>,

    /// Parameter name -> scalar value
    #[serde(default)]
    pub parameters: BTreeMap<String, WireParameter>,

    /// Where the response must be written
    pub output_file: String,
}

impl InvocationRequest {
    /// Parse a request from its JSON wire encoding
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|e| InvokeError::Schema(format!("malformed invocation request: {e}")))
    }

    /// Read and parse a request from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path).map_err(|source| InvokeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&payload)
    }
}

/// The wire-format object written back to the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvocationResponse {
    /// Logical output name -> artifacts with echoed ids and produced
    /// properties
    #[serde(default)]
    pub outputs: BTreeMap<String, Vec<WireArtifact>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST_JSON: &str = r#"
    {
        "inputs": {},
        "outputs": {
            "model": [{"id": 7, "type": "Model"}]
        },
        "parameters": {
            "filename": {"stringValue": "tflite"}
        },
        "output_file": "/tmp/outputs/response.json"
    }
    "#;

    #[test]
    fn test_request_parsing() {
        let request = InvocationRequest::from_json(REQUEST_JSON).unwrap();

        assert!(request.inputs.is_empty());
        assert_eq!(request.outputs["model"].len(), 1);
        assert_eq!(request.outputs["model"][0].id, 7);
        assert_eq!(
            request.parameters["filename"].string_value.as_deref(),
            Some("tflite")
        );
        assert_eq!(request.output_file, "/tmp/outputs/response.json");
    }

    #[test]
    fn test_malformed_request_is_schema_error() {
        let err = InvocationRequest::from_json("{not json").unwrap_err();
        assert!(matches!(err, InvokeError::Schema(_)));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let request =
            InvocationRequest::from_json(r#"{"output_file": "/tmp/out.json"}"#).unwrap();

        assert!(request.inputs.is_empty());
        assert!(request.outputs.is_empty());
        assert!(request.parameters.is_empty());
    }
}

//! Execution status types shared with the external metadata store.
//!
//! The metadata store owns the execution record; this crate only reads and
//! writes one reserved custom property on it. All other properties belong to
//! external collaborators and are never touched here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PropertyValue;

/// Outcome of one completed invocation.
///
/// Serialized as `{"resultMessage": ..., "code": ...}` to match the metadata
/// store's schema. A result is either fully present or fully absent; there
/// is no partial result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Free-text result message
    #[serde(default)]
    pub result_message: String,

    /// Numeric status code; 0 means success
    #[serde(default)]
    pub code: i32,
}

/// A generic key/value property bag representing one step's execution,
/// supplied by the external metadata system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Custom properties; one reserved key carries the execution result
    #[serde(default)]
    pub custom_properties: BTreeMap<String, PropertyValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_result_wire_names() {
        let result = ExecutionResult {
            result_message: "error message.".to_string(),
            code: 1,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"resultMessage":"error message.","code":1}"#);
    }

    #[test]
    fn test_fresh_record_has_no_properties() {
        let record = ExecutionRecord::default();
        assert!(record.custom_properties.is_empty());
    }
}

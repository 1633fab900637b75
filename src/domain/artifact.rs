//! Artifact records exchanged between the orchestrator and a step executor.
//!
//! An artifact is a reference to a unit of data (a file, a model, ...)
//! produced or consumed by a step. The orchestrator assigns each artifact a
//! numeric id that is unique within one invocation and must be echoed back
//! verbatim in the response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A typed scalar value carried by artifact properties and step parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Integer value (tried first so whole numbers stay integers)
    Int(i64),

    /// Floating-point value
    Double(f64),

    /// String value
    Str(String),
}

/// An artifact as a step executor sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Orchestrator-assigned id, unique within this invocation
    pub id: i64,

    /// Resolved human-readable name, unique within this invocation's id space
    pub name: String,

    /// Type designation (e.g. "Model", "Examples")
    pub artifact_type: String,

    /// Storage location of the artifact's byte content
    pub uri: String,

    /// Custom properties; executors write their outputs here
    pub properties: BTreeMap<String, PropertyValue>,
}

impl ArtifactRecord {
    /// Set (or overwrite) a custom property
    pub fn set_property(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.insert(key.into(), value);
    }

    /// Look up a custom property
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

/// An artifact descriptor in wire format.
///
/// Requests carry `id`, `type`, and optionally `name`, `uri`, and
/// `properties`. Responses echo `id` and carry whatever `uri`/`properties`
/// the executor produced; the orchestrator already knows the type it
/// assigned, so it is not repeated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireArtifact {
    /// Orchestrator-assigned numeric id
    pub id: i64,

    /// Type designation; required on request artifacts
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,

    /// Durable name; assigned during decode when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Storage location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Scalar property map; non-scalar values are tolerated on decode
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_parsing() {
        let int: PropertyValue = serde_json::from_str("1024").unwrap();
        assert_eq!(int, PropertyValue::Int(1024));

        let double: PropertyValue = serde_json::from_str("0.5").unwrap();
        assert_eq!(double, PropertyValue::Double(0.5));

        let string: PropertyValue = serde_json::from_str("\"tflite\"").unwrap();
        assert_eq!(string, PropertyValue::Str("tflite".to_string()));
    }

    #[test]
    fn test_wire_artifact_omits_empty_fields() {
        let artifact = WireArtifact {
            id: 7,
            ..Default::default()
        };

        let json = serde_json::to_string(&artifact).unwrap();
        assert_eq!(json, r#"{"id":7}"#);
    }

    #[test]
    fn test_wire_artifact_request_shape() {
        let json = r#"{"id": 7, "type": "Model", "uri": "gs://bucket/model"}"#;
        let artifact: WireArtifact = serde_json::from_str(json).unwrap();

        assert_eq!(artifact.id, 7);
        assert_eq!(artifact.artifact_type.as_deref(), Some("Model"));
        assert_eq!(artifact.uri.as_deref(), Some("gs://bucket/model"));
        assert!(artifact.name.is_none());
    }
}

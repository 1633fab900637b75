//! Artifact codec: wire descriptors <-> in-memory artifact maps.
//!
//! Decoding builds the id registry that ties orchestrator-assigned numeric
//! ids to human-readable names. Encoding consults that registry, never
//! recomputes it, so ids issued by the orchestrator are echoed back
//! unchanged.

use std::collections::BTreeMap;

use tracing::warn;

use crate::domain::{ArtifactMap, ArtifactRecord, PropertyValue, WireArtifact};
use crate::error::{InvokeError, Result};

/// Two-way id <-> name lookup for one invocation.
///
/// Mutated only while the request is decoded, read-only thereafter. Passed
/// by reference through the pipeline stages; there is no ambient registry.
#[derive(Debug, Default)]
pub struct IdRegistry {
    name_from_id: BTreeMap<i64, String>,
    id_from_name: BTreeMap<String, i64>,
}

impl IdRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `(id, name)` pair seen during decode
    pub fn record(&mut self, id: i64, name: &str) {
        self.name_from_id.insert(id, name.to_string());
        self.id_from_name.insert(name.to_string(), id);
    }

    /// Resolve the name assigned to an id
    pub fn name(&self, id: i64) -> Option<&str> {
        self.name_from_id.get(&id).map(String::as_str)
    }

    /// Resolve the id originally assigned to a name
    pub fn id(&self, name: &str) -> Option<i64> {
        self.id_from_name.get(name).copied()
    }

    /// Number of registered artifacts
    pub fn len(&self) -> usize {
        self.name_from_id.len()
    }

    /// Whether any artifact has been registered
    pub fn is_empty(&self) -> bool {
        self.name_from_id.is_empty()
    }
}

/// Decode a wire artifact mapping into records, registering every
/// `(id, name)` pair in `ids`.
///
/// Fails with a schema error when an entry lacks the type designation
/// required to interpret its properties. Malformed optional property values
/// never fail the decode; they are skipped with a warning.
pub fn decode_artifacts(
    wire: &BTreeMap<String, Vec<WireArtifact>>,
    ids: &mut IdRegistry,
) -> Result<ArtifactMap> {
    let mut decoded = BTreeMap::new();

    for (logical_name, entries) in wire {
        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            records.push(decode_artifact(logical_name, entry, ids)?);
        }
        decoded.insert(logical_name.clone(), records);
    }

    Ok(decoded)
}

fn decode_artifact(
    logical_name: &str,
    entry: &WireArtifact,
    ids: &mut IdRegistry,
) -> Result<ArtifactRecord> {
    let artifact_type = entry.artifact_type.clone().ok_or_else(|| {
        InvokeError::Schema(format!(
            "artifact {} under '{logical_name}' has no type designation",
            entry.id
        ))
    })?;

    // Names are unique within the invocation because ids are.
    let name = entry
        .name
        .clone()
        .unwrap_or_else(|| format!("artifact-{}", entry.id));
    ids.record(entry.id, &name);

    let mut properties = BTreeMap::new();
    for (key, value) in &entry.properties {
        match scalar_from_json(value) {
            Some(scalar) => {
                properties.insert(key.clone(), scalar);
            }
            None => {
                warn!(artifact = %name, property = %key, "Skipping non-scalar property value");
            }
        }
    }

    Ok(ArtifactRecord {
        id: entry.id,
        name,
        artifact_type,
        uri: entry.uri.clone().unwrap_or_default(),
        properties,
    })
}

/// Encode produced artifacts back into wire format.
///
/// Every record's id is looked up in `ids` by name and re-attached
/// unchanged. A name that was never seen during decode is an identity
/// violation: an output artifact's identifier is immutable orchestrator
/// state, and a step must not invent artifacts with unknown identity.
pub fn encode_artifacts(
    outputs: &ArtifactMap,
    ids: &IdRegistry,
) -> Result<BTreeMap<String, Vec<WireArtifact>>> {
    let mut encoded = BTreeMap::new();

    for (logical_name, records) in outputs {
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let id = ids
                .id(&record.name)
                .ok_or_else(|| InvokeError::Identity(record.name.clone()))?;

            let mut properties = BTreeMap::new();
            for (key, value) in &record.properties {
                properties.insert(key.clone(), scalar_to_json(value));
            }

            entries.push(WireArtifact {
                id,
                artifact_type: None,
                name: None,
                uri: (!record.uri.is_empty()).then(|| record.uri.clone()),
                properties,
            });
        }
        encoded.insert(logical_name.clone(), entries);
    }

    Ok(encoded)
}

fn scalar_from_json(value: &serde_json::Value) -> Option<PropertyValue> {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(PropertyValue::Int(i))
            } else {
                n.as_f64().map(PropertyValue::Double)
            }
        }
        serde_json::Value::String(s) => Some(PropertyValue::Str(s.clone())),
        _ => None,
    }
}

fn scalar_to_json(value: &PropertyValue) -> serde_json::Value {
    match value {
        PropertyValue::Int(i) => serde_json::Value::from(*i),
        PropertyValue::Double(d) => serde_json::Value::from(*d),
        PropertyValue::Str(s) => serde_json::Value::from(s.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_map(json: serde_json::Value) -> BTreeMap<String, Vec<WireArtifact>> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_decode_registers_ids() {
        let wire = wire_map(json!({
            "examples": [
                {"id": 1, "type": "Examples", "name": "train-split"},
                {"id": 2, "type": "Examples", "name": "eval-split"}
            ]
        }));

        let mut ids = IdRegistry::new();
        let decoded = decode_artifacts(&wire, &mut ids).unwrap();

        assert_eq!(decoded["examples"].len(), 2);
        assert_eq!(ids.len(), 2);
        assert_eq!(ids.name(1), Some("train-split"));
        assert_eq!(ids.id("eval-split"), Some(2));
    }

    #[test]
    fn test_decode_assigns_missing_names() {
        let wire = wire_map(json!({
            "model": [{"id": 7, "type": "Model"}]
        }));

        let mut ids = IdRegistry::new();
        let decoded = decode_artifacts(&wire, &mut ids).unwrap();

        assert_eq!(decoded["model"][0].name, "artifact-7");
        assert_eq!(ids.id("artifact-7"), Some(7));
    }

    #[test]
    fn test_decode_requires_type() {
        let wire = wire_map(json!({
            "model": [{"id": 7}]
        }));

        let mut ids = IdRegistry::new();
        let err = decode_artifacts(&wire, &mut ids).unwrap_err();

        assert!(matches!(err, InvokeError::Schema(_)));
        assert!(err.to_string().contains("type designation"));
    }

    #[test]
    fn test_decode_skips_non_scalar_properties() {
        let wire = wire_map(json!({
            "model": [{
                "id": 7,
                "type": "Model",
                "properties": {
                    "size": 1024,
                    "nested": {"not": "scalar"},
                    "span": "full"
                }
            }]
        }));

        let mut ids = IdRegistry::new();
        let decoded = decode_artifacts(&wire, &mut ids).unwrap();
        let record = &decoded["model"][0];

        assert_eq!(record.property("size"), Some(&PropertyValue::Int(1024)));
        assert_eq!(
            record.property("span"),
            Some(&PropertyValue::Str("full".to_string()))
        );
        assert!(record.property("nested").is_none());
    }

    #[test]
    fn test_encode_echoes_registered_ids() {
        let wire = wire_map(json!({
            "model": [{"id": 7, "type": "Model", "uri": "gs://bucket/model"}]
        }));

        let mut ids = IdRegistry::new();
        let mut decoded = decode_artifacts(&wire, &mut ids).unwrap();

        // An executor tampering with the in-memory id must not leak through;
        // the registry is the source of truth.
        decoded.get_mut("model").unwrap()[0].id = 999;
        decoded.get_mut("model").unwrap()[0]
            .set_property("size", PropertyValue::Int(1024));

        let encoded = encode_artifacts(&decoded, &ids).unwrap();

        assert_eq!(encoded["model"][0].id, 7);
        assert_eq!(encoded["model"][0].properties["size"], json!(1024));
        assert_eq!(encoded["model"][0].uri.as_deref(), Some("gs://bucket/model"));
    }

    #[test]
    fn test_encode_rejects_unregistered_names() {
        let mut outputs: ArtifactMap = BTreeMap::new();
        outputs.insert(
            "model".to_string(),
            vec![ArtifactRecord {
                id: 1,
                name: "invented".to_string(),
                artifact_type: "Model".to_string(),
                uri: String::new(),
                properties: BTreeMap::new(),
            }],
        );

        let ids = IdRegistry::new();
        let err = encode_artifacts(&outputs, &ids).unwrap_err();

        assert!(matches!(err, InvokeError::Identity(_)));
        assert!(err.to_string().contains("invented"));
    }
}

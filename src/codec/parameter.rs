//! Parameter codec: wire parameters -> typed scalar values.
//!
//! Parameters are read-only inputs to a step, so there is no encode
//! direction.

use std::collections::BTreeMap;

use crate::domain::{ParameterMap, PropertyValue, WireParameter};
use crate::error::{InvokeError, Result};

/// Decode the wire parameter mapping.
///
/// Each wire parameter must carry exactly one populated scalar field; zero
/// or more than one is a schema violation naming the offending parameter.
pub fn decode_parameters(wire: &BTreeMap<String, WireParameter>) -> Result<ParameterMap> {
    let mut decoded = BTreeMap::new();

    for (name, param) in wire {
        let value = match (&param.int_value, &param.double_value, &param.string_value) {
            (Some(i), None, None) => PropertyValue::Int(*i),
            (None, Some(d), None) => PropertyValue::Double(*d),
            (None, None, Some(s)) => PropertyValue::Str(s.clone()),
            (None, None, None) => {
                return Err(InvokeError::Schema(format!(
                    "parameter '{name}' has no value field populated"
                )))
            }
            _ => {
                return Err(InvokeError::Schema(format!(
                    "parameter '{name}' has more than one value field populated"
                )))
            }
        };
        decoded.insert(name.clone(), value);
    }

    Ok(decoded)
}

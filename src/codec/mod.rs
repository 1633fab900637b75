//! Codecs moving structured execution state across the process boundary.
//!
//! - `artifact`: wire artifact mapping <-> in-memory artifact map, plus the
//!   id registry shared between request parsing and response writing
//! - `parameter`: wire parameters -> typed scalars (decode only)
//! - `result`: execution result piggybacked on the metadata store's record

pub mod artifact;
pub mod parameter;
pub mod result;

pub use artifact::{decode_artifacts, encode_artifacts, IdRegistry};
pub use parameter::decode_parameters;
pub use result::{get_result, set_result, EXECUTION_RESULT_KEY};

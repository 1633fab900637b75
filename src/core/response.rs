//! Response writing.
//!
//! The response fully replaces whatever exists at the destination. Writing
//! goes through a temp file in the destination directory followed by a
//! rename, so a reader never observes a partially written file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::codec::{encode_artifacts, IdRegistry};
use crate::domain::{ArtifactMap, InvocationResponse};
use crate::error::{InvokeError, Result};

/// Encode `outputs`, wrap them in a response, and persist to `destination`,
/// creating missing parent directories.
pub fn write_response(outputs: &ArtifactMap, ids: &IdRegistry, destination: &Path) -> Result<()> {
    let response = InvocationResponse {
        outputs: encode_artifacts(outputs, ids)?,
    };

    let payload = serde_json::to_vec_pretty(&response)
        .map_err(|e| InvokeError::Schema(format!("failed to encode response: {e}")))?;

    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(parent).map_err(|source| InvokeError::Io {
        path: parent.display().to_string(),
        source,
    })?;

    let io_err = |source: std::io::Error| InvokeError::Io {
        path: destination.display().to_string(),
        source,
    };

    let mut file = NamedTempFile::new_in(parent).map_err(io_err)?;
    file.write_all(&payload).map_err(io_err)?;
    file.persist(destination)
        .map_err(|e| io_err(e.error))?;

    info!(path = %destination.display(), bytes = payload.len(), "Response written");
    Ok(())
}

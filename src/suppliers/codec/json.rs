use super::write_atomic;
use crate::error::{Result, SupplierError};
use crate::model::Snapshot;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Reads a snapshot file. Any failure to produce a snapshot (missing file,
/// unreadable bytes, wrong JSON shape) is reported as malformed input.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.is_file() {
        return Err(SupplierError::malformed(path, "file not found"));
    }
    let content = fs::read_to_string(path).map_err(|e| SupplierError::malformed(path, e))?;
    let snapshot: Snapshot =
        serde_json::from_str(&content).map_err(|e| SupplierError::malformed(path, e))?;
    debug!(path = %path.display(), entries = snapshot.len(), "read snapshot");
    Ok(snapshot)
}

pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let content = serde_json::to_string_pretty(snapshot).map_err(io::Error::from)?;
    write_atomic(path, content.as_bytes())?;
    debug!(path = %path.display(), entries = snapshot.len(), "wrote snapshot");
    Ok(())
}

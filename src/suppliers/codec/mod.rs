//! # File Codecs
//!
//! Readers and writers for the two on-disk formats:
//!
//! - [`csv`]: the mirror file, a flat table with the header `ID,Name,Email,Created At`
//! - [`json`]: snapshot files used for export and import
//!
//! Both writers go through [`write_atomic`]: the bytes land in a temp file next to
//! the target and are renamed over it, so a failed write never leaves a truncated file.

pub mod csv;
pub mod json;

use crate::error::{Result, SupplierError};
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = parent {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(SupplierError::Io)?;
        }
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    let tmp_name = format!(".{}-{}.tmp", file_name, Uuid::new_v4());
    let tmp_path = match parent {
        Some(dir) => dir.join(tmp_name),
        None => Path::new(&tmp_name).to_path_buf(),
    };

    fs::write(&tmp_path, bytes).map_err(SupplierError::Io)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SupplierError::Io(e));
    }
    Ok(())
}

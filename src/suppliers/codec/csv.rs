use super::write_atomic;
use crate::error::{Result, SupplierError};
use crate::model::Supplier;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

pub const CSV_HEADER: [&str; 4] = ["ID", "Name", "Email", "Created At"];

/// One data row of the mirror file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Created At")]
    pub created_at: String,
}

impl From<&Supplier> for SupplierRow {
    fn from(s: &Supplier) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            email: s.email.clone(),
            created_at: s.created_at.clone(),
        }
    }
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Supplier {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// Reads every row of the file at `path`. A missing or zero-length file yields no rows.
pub fn read_rows(path: &Path) -> Result<Vec<SupplierRow>> {
    if !path.exists() {
        debug!(path = %path.display(), "no csv mirror yet");
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(SupplierError::Io)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| SupplierError::malformed(path, e))?
        .clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if !headers.iter().eq(CSV_HEADER) {
        return Err(SupplierError::malformed(
            path,
            format!(
                "unexpected header '{}', expected '{}'",
                headers.iter().collect::<Vec<_>>().join(","),
                CSV_HEADER.join(",")
            ),
        ));
    }

    let rows = reader
        .deserialize::<SupplierRow>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| SupplierError::malformed(path, e))?;
    debug!(path = %path.display(), rows = rows.len(), "read csv mirror");
    Ok(rows)
}

/// Rewrites the whole file: header first, then one line per row.
pub fn write_rows<I>(path: &Path, rows: I) -> Result<()>
where
    I: IntoIterator<Item = SupplierRow>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(io::Error::from)?;
    let mut count = 0usize;
    for row in rows {
        writer.serialize(row).map_err(io::Error::from)?;
        count += 1;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    write_atomic(path, &bytes)?;
    debug!(path = %path.display(), rows = count, "wrote csv mirror");
    Ok(())
}

use super::TableBackend;
use crate::codec::csv::{read_rows, write_rows, SupplierRow};
use crate::error::Result;
use crate::model::{Supplier, SupplierTable};
use std::path::{Path, PathBuf};

/// Mirrors the table into a single CSV file.
pub struct CsvBackend {
    path: PathBuf,
}

impl CsvBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableBackend for CsvBackend {
    fn load(&self) -> Result<SupplierTable> {
        // Later rows win if an id repeats.
        Ok(read_rows(&self.path)?
            .into_iter()
            .map(|row| (row.id.clone(), Supplier::from(row)))
            .collect())
    }

    fn save(&self, table: &SupplierTable) -> Result<()> {
        write_rows(&self.path, table.values().map(SupplierRow::from))
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_reproduces_table() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::new(dir.path().join("suppliers.csv"));

        let mut table = SupplierTable::new();
        for (id, name) in [("b", "Beta"), ("a", "Alpha")] {
            table.insert(
                id.to_string(),
                Supplier::new(id, name, format!("{}@x.io", id), "2024-01-01 00:00:00"),
            );
        }

        backend.save(&table).unwrap();
        assert_eq!(backend.load().unwrap(), table);
    }

    #[test]
    fn rows_are_written_in_table_order() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::new(dir.path().join("suppliers.csv"));

        let mut table = SupplierTable::new();
        for id in ["b", "a"] {
            table.insert(
                id.to_string(),
                Supplier::new(id, "N", "n@x.io", "2024-01-01 00:00:00"),
            );
        }
        backend.save(&table).unwrap();

        let text = fs::read_to_string(backend.path()).unwrap();
        let ids: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn duplicate_rows_keep_the_last() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("suppliers.csv");
        fs::write(
            &path,
            "ID,Name,Email,Created At\nx,Old,o@x.io,t1\nx,New,n@x.io,t2\n",
        )
        .unwrap();

        let table = CsvBackend::new(&path).load().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["x"].name, "New");
    }

    #[test]
    fn rows_are_loaded_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("suppliers.csv");
        fs::write(&path, "ID,Name,Email,Created At\nx,,not-an-email,whenever\n").unwrap();

        let table = CsvBackend::new(&path).load().unwrap();
        assert_eq!(table["x"].email, "not-an-email");
        assert_eq!(table["x"].name, "");
    }
}

use super::TableBackend;
use crate::error::{Result, SupplierError};
use crate::model::SupplierTable;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// In-memory mirror for testing. Does NOT persist data.
#[derive(Default)]
pub struct MemBackend {
    saved: RefCell<Option<SupplierTable>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing mirror, as if a previous run had saved `table`.
    pub fn with_table(table: SupplierTable) -> Self {
        let backend = Self::default();
        backend.saved.replace(Some(table));
        backend
    }

    /// What the last successful save wrote, or `None` if nothing was ever saved.
    pub fn saved(&self) -> Option<SupplierTable> {
        self.saved.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Makes subsequent saves fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl TableBackend for MemBackend {
    fn load(&self) -> Result<SupplierTable> {
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, table: &SupplierTable) -> Result<()> {
        if self.fail_writes.get() {
            return Err(SupplierError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mirror is read-only",
            )));
        }
        self.saved.replace(Some(table.clone()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://suppliers")
    }
}

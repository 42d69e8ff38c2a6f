use crate::error::Result;
use crate::model::SupplierTable;
use std::path::PathBuf;

/// Abstract interface for the durable mirror of the supplier table.
/// This trait handles the "where" of persistence (file vs memory),
/// while SupplierStore handles the "what" (validation, ids, merge rules).
pub trait TableBackend {
    /// Load every stored record. An absent mirror is an empty table.
    /// Records are taken verbatim; no validation happens here.
    fn load(&self) -> Result<SupplierTable>;

    /// Replace the mirror with `table`.
    /// MUST be all-or-nothing: on error the previous mirror is left intact.
    fn save(&self, table: &SupplierTable) -> Result<()>;

    /// Where the mirror lives. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}

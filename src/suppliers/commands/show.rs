use crate::commands::CmdResult;
use crate::error::{Result, SupplierError};
use crate::store::{SupplierStore, TableBackend};

pub fn run<B: TableBackend>(store: &SupplierStore<B>, id: &str) -> Result<CmdResult> {
    let supplier = store
        .get(id)
        .cloned()
        .ok_or_else(|| SupplierError::NotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed(vec![supplier]))
}

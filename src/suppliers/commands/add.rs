use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SupplierError};
use crate::store::{SupplierStore, TableBackend};

pub fn run<B: TableBackend>(
    store: &mut SupplierStore<B>,
    name: &str,
    email: &str,
) -> Result<CmdResult> {
    let id = store.add(name, email)?;
    let supplier = store
        .get(&id)
        .cloned()
        .ok_or_else(|| SupplierError::NotFound(id.clone()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Supplier added: {} ({})",
        supplier.name, supplier.id
    )));
    Ok(result.with_affected(vec![supplier]))
}

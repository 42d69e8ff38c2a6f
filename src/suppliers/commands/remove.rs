use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SupplierStore, TableBackend};

/// Removes the given suppliers. Unknown ids fail the whole call before anything is removed.
pub fn run<B: TableBackend, S: AsRef<str>>(
    store: &mut SupplierStore<B>,
    ids: &[S],
) -> Result<CmdResult> {
    let removed = store.remove_many(ids)?;

    let mut result = CmdResult::default();
    for supplier in &removed {
        result.add_message(CmdMessage::success(format!(
            "Supplier removed: {} ({})",
            supplier.name, supplier.id
        )));
    }
    Ok(result.with_affected(removed))
}

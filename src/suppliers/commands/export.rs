use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SupplierStore, TableBackend};
use std::path::Path;

pub fn run<B: TableBackend>(store: &SupplierStore<B>, dest: &Path) -> Result<CmdResult> {
    let count = store.export_snapshot(dest)?;

    let mut result = CmdResult::default();
    if count == 0 {
        result.add_message(CmdMessage::info("No suppliers to export; wrote an empty snapshot."));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} supplier{} to {}",
        count,
        if count == 1 { "" } else { "s" },
        dest.display()
    )));
    Ok(result)
}

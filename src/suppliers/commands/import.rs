use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SupplierStore, TableBackend};
use std::path::Path;

pub fn run<B: TableBackend>(store: &mut SupplierStore<B>, src: &Path) -> Result<CmdResult> {
    let summary = store.import_snapshot(src)?;

    let mut result = CmdResult::default();
    if summary.merged() == 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} contains no suppliers",
            src.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Imported {} suppliers ({} new, {} updated)",
            summary.merged(),
            summary.added,
            summary.updated
        )));
    }
    Ok(result.with_summary(summary))
}

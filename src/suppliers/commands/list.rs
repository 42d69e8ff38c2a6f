use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Supplier;
use crate::store::{SupplierStore, TableBackend};

/// Lists suppliers oldest first, optionally keeping only those whose
/// name or email contains `search` (case-insensitive).
pub fn run<B: TableBackend>(store: &SupplierStore<B>, search: Option<&str>) -> Result<CmdResult> {
    let needle = search.map(str::to_lowercase);
    let mut listed: Vec<Supplier> = store
        .suppliers()
        .values()
        .filter(|s| match &needle {
            Some(term) => {
                s.name.to_lowercase().contains(term) || s.email.to_lowercase().contains(term)
            }
            None => true,
        })
        .cloned()
        .collect();

    listed.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let msg = match search {
            Some(term) => format!("No suppliers match '{}'.", term),
            None => "No suppliers yet.".to_string(),
        };
        result.add_message(CmdMessage::info(msg));
    }
    Ok(result.with_listed(listed))
}

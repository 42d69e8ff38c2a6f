use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The in-memory table, keyed by supplier id.
pub type SupplierTable = BTreeMap<String, Supplier>;

/// A JSON snapshot, keyed by supplier id.
pub type Snapshot = BTreeMap<String, SnapshotEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl Supplier {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            created_at: created_at.into(),
        }
    }

    pub fn to_entry(&self) -> SnapshotEntry {
        SnapshotEntry {
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: Some(self.created_at.clone()),
        }
    }
}

/// One value of a snapshot file. The id lives in the enclosing map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl SnapshotEntry {
    /// Builds the record for `id`, falling back to `now` when the entry has no timestamp.
    pub fn into_supplier(self, id: &str, now: &str) -> Supplier {
        Supplier {
            id: id.to_string(),
            name: self.name,
            email: self.email,
            created_at: self.created_at.unwrap_or_else(|| now.to_string()),
        }
    }
}

pub fn snapshot_of(table: &SupplierTable) -> Snapshot {
    table
        .iter()
        .map(|(id, supplier)| (id.clone(), supplier.to_entry()))
        .collect()
}

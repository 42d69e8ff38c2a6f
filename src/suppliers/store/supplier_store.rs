use super::TableBackend;
use crate::codec::json::{read_snapshot, write_snapshot};
use crate::error::{Result, SupplierError};
use crate::model::{snapshot_of, Snapshot, Supplier, SupplierTable};
use crate::services::{
    validate_supplier, Clock, IdGenerator, SystemClock, UuidGenerator, ValidationError,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Retries before giving up on an id generator that keeps returning taken ids.
const MAX_ID_ATTEMPTS: usize = 16;

/// How imported records are checked before they are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportPolicy {
    /// Imported records must satisfy the same rules as `add`.
    #[default]
    Validate,
    /// Imported records are merged as they are.
    Permissive,
}

/// Outcome of a snapshot import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
}

impl ImportSummary {
    pub fn merged(&self) -> usize {
        self.added + self.updated
    }
}

/// The supplier register: the in-memory table plus its durable mirror.
pub struct SupplierStore<B: TableBackend> {
    backend: B,
    table: SupplierTable,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    import_policy: ImportPolicy,
}

impl<B: TableBackend> SupplierStore<B> {
    /// An empty store over `backend`. Call [`load`](Self::load) to read the mirror.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            table: SupplierTable::new(),
            ids: Box::new(UuidGenerator),
            clock: Box::new(SystemClock),
            import_policy: ImportPolicy::default(),
        }
    }

    /// A store populated from `backend`.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::new(backend);
        store.load()?;
        Ok(store)
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_import_policy(mut self, policy: ImportPolicy) -> Self {
        self.import_policy = policy;
        self
    }

    /// Replaces the in-memory table with whatever the mirror holds.
    pub fn load(&mut self) -> Result<&SupplierTable> {
        self.table = self.backend.load()?;
        debug!(
            location = %self.backend.location().display(),
            count = self.table.len(),
            "loaded suppliers"
        );
        Ok(&self.table)
    }

    /// Registers a new supplier and returns its id.
    pub fn add(&mut self, name: &str, email: &str) -> Result<String> {
        let (name, email) = (name.trim(), email.trim());
        validate_supplier(name, email)?;

        let id = self.fresh_id()?;
        let supplier = Supplier::new(id.clone(), name, email, self.clock.timestamp());

        let mut next = self.table.clone();
        next.insert(id.clone(), supplier);
        self.commit(next)?;

        info!(%id, supplier = name, "supplier added");
        Ok(id)
    }

    pub fn remove(&mut self, id: &str) -> Result<Supplier> {
        let mut removed = self.remove_many(&[id])?;
        Ok(removed.remove(0))
    }

    /// Removes every listed id with a single mirror write.
    /// Nothing is removed unless all ids exist.
    pub fn remove_many<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<Vec<Supplier>> {
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        if let Some(missing) = ids.iter().find(|id| !self.table.contains_key(**id)) {
            return Err(SupplierError::NotFound(missing.to_string()));
        }

        let mut next = self.table.clone();
        let removed: Vec<Supplier> = ids.iter().filter_map(|id| next.remove(*id)).collect();
        self.commit(next)?;

        for supplier in &removed {
            info!(id = %supplier.id, "supplier removed");
        }
        Ok(removed)
    }

    /// Writes the whole table to `dest` as JSON. Returns the number of records written.
    pub fn export_snapshot(&self, dest: &Path) -> Result<usize> {
        write_snapshot(dest, &snapshot_of(&self.table))?;
        info!(path = %dest.display(), count = self.table.len(), "exported snapshot");
        Ok(self.table.len())
    }

    /// Merges the snapshot at `src` into the table, keyed by the ids in the file.
    /// The file is parsed and checked in full before anything changes.
    pub fn import_snapshot(&mut self, src: &Path) -> Result<ImportSummary> {
        let snapshot = read_snapshot(src)?;
        let snapshot = self.checked(snapshot)?;

        let mut summary = ImportSummary::default();
        if snapshot.is_empty() {
            return Ok(summary);
        }

        let now = self.clock.timestamp();
        let mut next = self.table.clone();
        for (id, entry) in snapshot {
            let supplier = entry.into_supplier(&id, &now);
            if next.insert(id, supplier).is_some() {
                summary.updated += 1;
            } else {
                summary.added += 1;
            }
        }
        self.commit(next)?;

        info!(
            path = %src.display(),
            added = summary.added,
            updated = summary.updated,
            "imported snapshot"
        );
        Ok(summary)
    }

    pub fn suppliers(&self) -> &SupplierTable {
        &self.table
    }

    pub fn get(&self, id: &str) -> Option<&Supplier> {
        self.table.get(id)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn checked(&self, snapshot: Snapshot) -> Result<Snapshot> {
        if self.import_policy == ImportPolicy::Permissive {
            return Ok(snapshot);
        }
        snapshot
            .into_iter()
            .map(|(id, entry)| {
                let invalid = |reason| SupplierError::InvalidImport {
                    id: id.clone(),
                    reason,
                };
                if id.trim().is_empty() {
                    return Err(invalid(ValidationError::EmptyId));
                }
                validate_supplier(entry.name.trim(), entry.email.trim()).map_err(invalid)?;
                Ok((id, entry))
            })
            .collect()
    }

    fn fresh_id(&self) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate_id();
            if !self.table.contains_key(&id) {
                return Ok(id);
            }
            warn!(%id, "generated id already in use, drawing another");
        }
        Err(SupplierError::IdsExhausted(MAX_ID_ATTEMPTS))
    }

    /// Persists `next` and, only if that succeeds, makes it the live table.
    fn commit(&mut self, next: SupplierTable) -> Result<()> {
        self.backend.save(&next)?;
        self.table = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SnapshotEntry;
    use crate::services::{FixedClock, SequentialIds};
    use crate::store::MemBackend;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    const NOW: &str = "2024-03-09 14:05:07";

    fn store() -> SupplierStore<MemBackend> {
        store_over(MemBackend::new())
    }

    fn store_over(backend: MemBackend) -> SupplierStore<MemBackend> {
        SupplierStore::new(backend)
            .with_id_generator(SequentialIds::new("sup"))
            .with_clock(FixedClock(
                Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
            ))
    }

    struct Repeating(&'static [&'static str], std::cell::Cell<usize>);

    impl IdGenerator for Repeating {
        fn generate_id(&self) -> String {
            let i = self.1.get();
            self.1.set(i + 1);
            self.0[i.min(self.0.len() - 1)].to_string()
        }
    }

    #[test]
    fn add_assigns_id_and_timestamp() {
        let mut store = store();
        let id = store.add("Acme Co", "buyer@acme.com").unwrap();

        assert_eq!(id, "sup-1");
        let s = store.get(&id).unwrap();
        assert_eq!(s.name, "Acme Co");
        assert_eq!(s.email, "buyer@acme.com");
        assert_eq!(s.created_at, NOW);
        assert_eq!(store.backend().saved().unwrap(), *store.suppliers());
    }

    #[test]
    fn add_trims_inputs() {
        let mut store = store();
        let id = store.add("  Acme  ", " buyer@acme.com ").unwrap();
        assert_eq!(store.get(&id).unwrap().name, "Acme");
        assert_eq!(store.get(&id).unwrap().email, "buyer@acme.com");
    }

    #[test]
    fn invalid_add_touches_nothing() {
        let mut store = store();
        store.add("Acme", "buyer@acme.com").unwrap();
        let writes = store.backend().write_count();

        for (name, email, expected) in [
            ("", "a@b.co", ValidationError::EmptyName),
            ("   ", "a@b.co", ValidationError::EmptyName),
            ("Beta", "", ValidationError::EmptyEmail),
            ("Beta", "beta-at-mail", ValidationError::InvalidEmail("beta-at-mail".into())),
        ] {
            let err = store.add(name, email).unwrap_err();
            match err {
                SupplierError::Validation(reason) => assert_eq!(reason, expected),
                other => panic!("unexpected error: {:?}", other),
            }
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn ids_stay_unique_when_generator_repeats() {
        let mut store = store_over(MemBackend::new()).with_id_generator(Repeating(
            &["dup", "dup", "dup", "other"],
            std::cell::Cell::new(0),
        ));
        let first = store.add("One", "one@x.io").unwrap();
        let second = store.add("Two", "two@x.io").unwrap();

        assert_eq!(first, "dup");
        assert_eq!(second, "other");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn stuck_generator_fails_without_mutation() {
        let mut store = store_over(MemBackend::new())
            .with_id_generator(Repeating(&["same"], std::cell::Cell::new(0)));
        store.add("One", "one@x.io").unwrap();

        let err = store.add("Two", "two@x.io").unwrap_err();
        assert!(matches!(err, SupplierError::IdsExhausted(MAX_ID_ATTEMPTS)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn many_adds_never_share_ids() {
        let mut store = SupplierStore::new(MemBackend::new());
        for i in 0..50 {
            store.add(&format!("S{}", i), &format!("s{}@x.io", i)).unwrap();
        }
        assert_eq!(store.len(), 50);
    }

    #[test]
    fn remove_unknown_is_not_found() {
        let mut store = store();
        store.add("Acme Co", "buyer@acme.com").unwrap();

        let err = store.remove("does-not-exist").unwrap_err();
        assert!(matches!(err, SupplierError::NotFound(ref id) if id == "does-not-exist"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_deletes_and_persists() {
        let mut store = store();
        let id = store.add("Acme Co", "buyer@acme.com").unwrap();
        let removed = store.remove(&id).unwrap();

        assert_eq!(removed.name, "Acme Co");
        assert!(store.is_empty());
        assert!(store.backend().saved().unwrap().is_empty());
    }

    #[test]
    fn remove_many_is_all_or_nothing() {
        let mut store = store();
        let a = store.add("A", "a@x.io").unwrap();
        let b = store.add("B", "b@x.io").unwrap();

        assert!(store.remove_many(&[a.as_str(), "ghost"]).is_err());
        assert_eq!(store.len(), 2);

        let removed = store.remove_many(&[a.as_str(), b.as_str()]).unwrap();
        assert_eq!(removed.len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn failed_write_leaves_table_unchanged() {
        let mut store = store();
        let id = store.add("Acme", "buyer@acme.com").unwrap();
        let before = store.suppliers().clone();

        store.backend().set_fail_writes(true);
        assert!(matches!(
            store.add("Beta", "b@beta.io").unwrap_err(),
            SupplierError::Io(_)
        ));
        assert!(matches!(store.remove(&id).unwrap_err(), SupplierError::Io(_)));

        assert_eq!(*store.suppliers(), before);
        assert_eq!(store.backend().saved().unwrap(), before);
    }

    #[test]
    fn load_replaces_table_verbatim() {
        let mut table = SupplierTable::new();
        table.insert(
            "legacy".into(),
            Supplier::new("legacy", "Old", "not-validated", "long ago"),
        );
        let mut store = store_over(MemBackend::with_table(table.clone()));
        assert!(store.is_empty());

        store.load().unwrap();
        assert_eq!(*store.suppliers(), table);
    }

    #[test]
    fn import_upserts_by_id() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.json");
        let mut store = store();
        let existing = store.add("Acme", "buyer@acme.com").unwrap();

        fs::write(
            &src,
            format!(
                r#"{{
                    "{existing}": {{"name": "Acme Renamed", "email": "new@acme.com", "created_at": "2020-01-01 00:00:00"}},
                    "fresh": {{"name": "Fresh", "email": "hi@fresh.io"}}
                }}"#
            ),
        )
        .unwrap();

        let summary = store.import_snapshot(&src).unwrap();
        assert_eq!(summary, ImportSummary { added: 1, updated: 1 });
        assert_eq!(summary.merged(), 2);
        assert_eq!(store.len(), 2);

        let renamed = store.get(&existing).unwrap();
        assert_eq!(renamed.name, "Acme Renamed");
        assert_eq!(renamed.created_at, "2020-01-01 00:00:00");
        assert_eq!(store.get("fresh").unwrap().created_at, NOW);
        assert_eq!(store.backend().saved().unwrap(), *store.suppliers());
    }

    #[test]
    fn malformed_import_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("bad.json");
        fs::write(&src, "{ not json").unwrap();

        let mut store = store();
        store.add("Acme", "buyer@acme.com").unwrap();
        let before = store.suppliers().clone();
        let writes = store.backend().write_count();

        for path in [src.clone(), dir.path().join("missing.json")] {
            let err = store.import_snapshot(&path).unwrap_err();
            assert!(matches!(err, SupplierError::MalformedInput { .. }));
        }
        assert_eq!(*store.suppliers(), before);
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn import_rejects_invalid_records_by_default() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.json");
        fs::write(
            &src,
            r#"{"ok": {"name": "Fine", "email": "f@x.io"}, "bad": {"name": "Bad", "email": "nope"}}"#,
        )
        .unwrap();

        let mut store = store();
        let err = store.import_snapshot(&src).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, SupplierError::InvalidImport { ref id, .. } if id == "bad"));
        assert!(err.to_string().contains("validate_imports"));
        assert!(store.is_empty());
        assert!(store.backend().saved().is_none());
    }

    #[test]
    fn permissive_import_takes_records_as_they_are() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.json");
        fs::write(&src, r#"{"bad": {"name": "", "email": "nope"}}"#).unwrap();

        let mut store = store().with_import_policy(ImportPolicy::Permissive);
        let summary = store.import_snapshot(&src).unwrap();
        assert_eq!(summary.added, 1);
        assert_eq!(store.get("bad").unwrap().email, "nope");
    }

    #[test]
    fn legacy_rows_round_trip_only_when_permissive() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.json");

        let mut table = SupplierTable::new();
        table.insert(
            "k2".into(),
            Supplier::new("k2", "Intranet", "legacy@intranet", "t0"),
        );
        let source = SupplierStore::open(MemBackend::with_table(table.clone())).unwrap();
        source.export_snapshot(&out).unwrap();

        let err = store().import_snapshot(&out).unwrap_err();
        assert!(matches!(err, SupplierError::InvalidImport { ref id, .. } if id == "k2"));

        let mut permissive = store().with_import_policy(ImportPolicy::Permissive);
        permissive.import_snapshot(&out).unwrap();
        assert_eq!(*permissive.suppliers(), table);
    }

    #[test]
    fn empty_snapshot_merges_nothing() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.json");
        fs::write(&src, "{}").unwrap();

        let mut store = store();
        assert_eq!(store.import_snapshot(&src).unwrap().merged(), 0);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn export_then_import_reproduces_table() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.json");

        let mut source = store();
        source.add("Acme Co", "buyer@acme.com").unwrap();
        source.add("Beta", "b@beta.io").unwrap();
        assert_eq!(source.export_snapshot(&out).unwrap(), 2);

        let mut target = SupplierStore::new(MemBackend::new());
        let summary = target.import_snapshot(&out).unwrap();
        assert_eq!(summary.added, 2);
        assert_eq!(target.suppliers(), source.suppliers());
    }

    #[test]
    fn validated_import_keeps_loaded_rows_verbatim() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.json");

        let mut table = SupplierTable::new();
        table.insert(
            "k1".into(),
            Supplier::new("k1", "Acme Co ", " buyer@acme.com", "t0"),
        );
        let source = SupplierStore::open(MemBackend::with_table(table.clone())).unwrap();
        source.export_snapshot(&out).unwrap();

        let mut target = store();
        target.import_snapshot(&out).unwrap();
        assert_eq!(*target.suppliers(), table);
        assert_eq!(target.backend().saved().unwrap(), table);
    }

    #[test]
    fn exported_json_is_keyed_by_id() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.json");
        let mut store = store();
        let id = store.add("Acme Co", "buyer@acme.com").unwrap();
        store.export_snapshot(&out).unwrap();

        let parsed: Snapshot = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(
            parsed[&id],
            SnapshotEntry {
                name: "Acme Co".into(),
                email: "buyer@acme.com".into(),
                created_at: Some(NOW.into()),
            }
        );
    }
}

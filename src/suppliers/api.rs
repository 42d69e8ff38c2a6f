//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every supplier operation, whatever UI sits on top.
//!
//! It dispatches to `commands/*.rs`, resolves default paths (the export target) and
//! returns structured `Result<CmdResult>` values. It never prints, never exits and
//! never formats for a terminal.
//!
//! `SuppliersApi<B: TableBackend>` is generic over the mirror:
//! - Production: `SuppliersApi<CsvBackend>`
//! - Testing: `SuppliersApi<MemBackend>`

use crate::commands::{self, CmdResult, SuppliersPaths};
use crate::error::Result;
use crate::store::{SupplierStore, TableBackend};
use std::path::Path;

pub struct SuppliersApi<B: TableBackend> {
    store: SupplierStore<B>,
    paths: SuppliersPaths,
}

impl<B: TableBackend> SuppliersApi<B> {
    pub fn new(store: SupplierStore<B>, paths: SuppliersPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_supplier(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, name, email)
    }

    pub fn remove_suppliers<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, ids)
    }

    pub fn list_suppliers(&self, search: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn show_supplier(&self, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.store, id)
    }

    /// Exports to `dest`, or to the configured export file when `dest` is `None`.
    pub fn export_suppliers(&self, dest: Option<&Path>) -> Result<CmdResult> {
        let dest = dest.unwrap_or(self.paths.export_file.as_path());
        commands::export::run(&self.store, dest)
    }

    pub fn import_suppliers(&mut self, src: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, src)
    }

    /// Re-reads the mirror, discarding the in-memory table.
    pub fn reload(&mut self) -> Result<usize> {
        Ok(self.store.load()?.len())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &SupplierStore<B> {
        &self.store
    }

    pub fn paths(&self) -> &SuppliersPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::store::ImportSummary;

//! # Storage Layer
//!
//! [`SupplierStore`] owns the authoritative in-memory table. Every mutation is
//! mirrored to a [`TableBackend`] before it becomes visible in memory, so the
//! mirror and the table never disagree once a call returns.
//!
//! ## Implementations
//!
//! - [`csv_backend::CsvBackend`]: production mirror, a single CSV file
//!   ```text
//!   ID,Name,Email,Created At
//!   4f7c...,Acme Co,buyer@acme.com,2024-03-09 14:05:07
//!   ```
//! - [`mem_backend::MemBackend`]: in-memory mirror for tests, with a switch
//!   that makes writes fail
//!
//! ## Write Path
//!
//! Mutations are staged on a copy of the table. The copy is handed to the
//! backend as a full rewrite (no appends, no diffs); only when that succeeds
//! does the copy replace the live table. A failed write therefore leaves both
//! sides exactly as they were.

pub mod backend;
pub mod csv_backend;
pub mod mem_backend;
pub mod supplier_store;

pub use backend::TableBackend;
pub use csv_backend::CsvBackend;
pub use mem_backend::MemBackend;
pub use supplier_store::{ImportPolicy, ImportSummary, SupplierStore};

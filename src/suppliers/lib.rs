//! # Suppliers Architecture
//!
//! Suppliers is a **UI-agnostic supplier register**: a list of suppliers (name, email,
//! creation time) held in memory and mirrored to a CSV file after every change, with
//! JSON snapshots for bulk export and import. The bundled binary is one client of the
//! library, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, renders tables, asks for confirmation  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - One command per user action, structured CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/supplier_store.rs)                            │
//! │  - Owns the table: add, remove, load, export, import        │
//! │  - Mirror == table after every call                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backends, codecs and services                              │
//! │  - TableBackend: CsvBackend (production), MemBackend (test) │
//! │  - codec::csv / codec::json, ids, clock, validation         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//!
//! Every mutating store call is all-or-nothing. Input is validated (add) or fully
//! parsed (import) before anything changes; the new table is written to the mirror
//! before it replaces the old one; and file writes go through a temp file and a
//! rename. An error therefore leaves memory and disk as they were.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user action
//! - [`store`]: The supplier store and its mirror backends
//! - [`codec`]: CSV and JSON file formats
//! - [`services`]: Id generation, clock, field validation
//! - [`model`]: `Supplier`, `SupplierTable`, `Snapshot`
//! - [`config`]: Per-register configuration
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod services;
pub mod store;

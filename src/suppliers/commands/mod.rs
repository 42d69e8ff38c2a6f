use crate::config::SuppliersConfig;
use crate::model::Supplier;
use crate::store::ImportSummary;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod remove;
pub mod show;

/// Resolved locations for one register.
#[derive(Debug, Clone)]
pub struct SuppliersPaths {
    pub data_dir: PathBuf,
    pub csv_file: PathBuf,
    pub export_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Supplier>,
    pub listed: Vec<Supplier>,
    pub summary: Option<ImportSummary>,
    pub config: Option<SuppliersConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, suppliers: Vec<Supplier>) -> Self {
        self.affected = suppliers;
        self
    }

    pub fn with_listed(mut self, suppliers: Vec<Supplier>) -> Self {
        self.listed = suppliers;
        self
    }

    pub fn with_summary(mut self, summary: ImportSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: SuppliersConfig) -> Self {
        self.config = Some(config);
        self
    }
}

use crate::services::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupplierError {
    #[error("Invalid supplier: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid supplier {id} in import: {reason} (set validate_imports to false to import records as they are)")]
    InvalidImport { id: String, reason: ValidationError },

    #[error("Supplier not found: {0}")]
    NotFound(String),

    #[error("Malformed input {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("No free supplier id after {0} attempts")]
    IdsExhausted(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SupplierError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SupplierError::MalformedInput {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True for both interactive and import-time validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SupplierError::Validation(_) | SupplierError::InvalidImport { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SupplierError>;

use crate::error::{Result, SupplierError};
use crate::store::ImportPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CSV_FILE: &str = "suppliers.csv";
const DEFAULT_EXPORT_FILE: &str = "suppliers.json";

/// Configuration for a supplier register, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuppliersConfig {
    /// Name of the CSV mirror inside the data directory
    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    /// Default file name for `export` when no path is given
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Apply the add-time name/email rules to imported records
    #[serde(default = "default_validate_imports")]
    pub validate_imports: bool,
}

fn default_csv_file() -> String {
    DEFAULT_CSV_FILE.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_validate_imports() -> bool {
    true
}

impl Default for SuppliersConfig {
    fn default() -> Self {
        Self {
            csv_file: default_csv_file(),
            export_file: default_export_file(),
            validate_imports: default_validate_imports(),
        }
    }
}

impl SuppliersConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SupplierError::Io)?;
        serde_json::from_str(&content).map_err(|e| SupplierError::malformed(&config_path, e))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SupplierError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        fs::write(config_path, content).map_err(SupplierError::Io)?;
        Ok(())
    }

    pub fn csv_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.csv_file)
    }

    pub fn export_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.export_file)
    }

    /// Value of a config key as shown by `suppliers config`
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "csv-file" => Some(self.csv_file.clone()),
            "export-file" => Some(self.export_file.clone()),
            "validate-imports" => Some(self.validate_imports.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "csv-file" | "export-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(format!("{} cannot be empty", key));
                }
                if key == "csv-file" {
                    self.csv_file = value.to_string();
                } else {
                    self.export_file = value.to_string();
                }
                Ok(())
            }
            "validate-imports" => {
                self.validate_imports = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("validate-imports must be true or false, got '{}'", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn import_policy(&self) -> ImportPolicy {
        if self.validate_imports {
            ImportPolicy::Validate
        } else {
            ImportPolicy::Permissive
        }
    }
}

use crate::commands::{CmdMessage, CmdResult, SuppliersPaths};
use crate::config::SuppliersConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `config.json` in the data directory.
/// A changed value applies from the next invocation on.
pub fn run(paths: &SuppliersPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = SuppliersConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {}",
                    key
                ))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(&paths.data_dir)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result.with_config(config))
        }
    }
}

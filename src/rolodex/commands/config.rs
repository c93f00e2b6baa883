use crate::commands::{CmdMessage, CmdResult};
use crate::config::RolodexConfig;
use crate::error::{Result, RolodexError};
use crate::store::fs::FileStore;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RolodexConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in RolodexConfig::KEYS {
                result.add_message(CmdMessage::info(format!("{key} = {}", config.get(key)?)));
            }
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{key} = {value}")));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            match &config.data_file {
                Some(path) if key == "data" => {
                    FileStore::open(path).map_err(|e| {
                        RolodexError::Config(format!(
                            "Cannot use data file {}: {e}",
                            path.display()
                        ))
                    })?;
                }
                _ => {}
            }
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{key} set to {}",
                config.get(&key)?
            )));
        }
    }

    result.config = Some(config);
    Ok(result)
}

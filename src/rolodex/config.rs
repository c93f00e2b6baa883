use crate::commands::pagination::PageSize;
use crate::commands::sort::SortKey;
use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rolodex, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Rows per page when `--per-page` is not given
    #[serde(default)]
    pub per_page: PageSize,

    /// Sort applied when `--sort` is not given
    #[serde(default)]
    pub sort_by: SortKey,

    /// JSON contact file; the built-in sample is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RolodexConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub const KEYS: &'static [&'static str] = &["per-page", "sort", "data"];

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "per-page" => Ok(self.per_page.to_string()),
            "sort" => Ok(self.sort_by.to_string()),
            "data" => Ok(self
                .data_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            other => Err(RolodexError::Config(format!("Unknown config key: {other}"))),
        }
    }

    /// Sets a key from its string form. An empty `data` value unsets the file;
    /// any other value must name an existing file and is stored canonicalized.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "per-page" => self.per_page = value.parse()?,
            "sort" => self.sort_by = value.parse()?,
            "data" if value.is_empty() => self.data_file = None,
            "data" => {
                let path = fs::canonicalize(value).map_err(|e| {
                    RolodexError::Config(format!("Cannot use data file {value}: {e}"))
                })?;
                self.data_file = Some(path);
            }
            other => {
                return Err(RolodexError::Config(format!("Unknown config key: {other}")))
            }
        }
        Ok(())
    }
}

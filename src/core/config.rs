//! Template selection settings.
//!
//! The only thing starpost lets users configure is which template files to
//! render. Settings come from `<config dir>/starpost/config.json` and can be
//! overridden per invocation from the command line.

use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, StarpostError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Template rendered when git data is available
    pub git_template: Option<PathBuf>,
    /// Template rendered when git data is unavailable
    pub fallback_template: Option<PathBuf>,
}

impl Config {
    /// Load the user config, or defaults if none exists
    pub fn load() -> Result<Self> {
        let config_dir = get_config_directory()?;
        Self::load_from(&config_dir)
    }

    /// Load `config.json` from `config_dir`.
    /// Relative template paths are resolved against `config_dir`.
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        if !config_file.exists() {
            log::debug!("No config at {}, using defaults", config_file.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_file)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| StarpostError::config_parse_failed(&config_file, e))?;

        log::debug!("Loaded config from {}", config_file.display());
        Ok(Self {
            git_template: config.git_template.map(|p| resolve(config_dir, p)),
            fallback_template: config.fallback_template.map(|p| resolve(config_dir, p)),
        })
    }

    /// Apply command-line overrides on top of the loaded settings
    pub fn with_overrides(
        self,
        git_template: Option<PathBuf>,
        fallback_template: Option<PathBuf>,
    ) -> Self {
        Self {
            git_template: git_template.or(self.git_template),
            fallback_template: fallback_template.or(self.fallback_template),
        }
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

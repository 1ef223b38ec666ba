use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::error::{ConfigError, Result};

pub static PATH_CONFIG_HOME: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Some(PathBuf::from(xdg_config_home));
        }
    }
    env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config"))
});

/// Default location of the radio config file
pub fn default_config_path() -> Result<PathBuf> {
    PATH_CONFIG_HOME
        .as_ref()
        .map(|dir| dir.join("pat").join("config.json"))
        .ok_or(ConfigError::NoConfigDir)
}

pub mod config;
pub mod manager;

pub use config::{
    ChatConfig, Config, ConfigError, ConfigResult, LlmConfig, LogLevel, LoggingConfig,
    ServerConfig, StorageConfig,
};
pub use manager::ConfigManager;

use std::path::PathBuf;

/// Sarovar data directory (`~/.sarovar`)
pub fn sarovar_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sarovar"))
}

/// Default config file path
pub fn default_config_path() -> Option<PathBuf> {
    sarovar_dir().map(|dir| dir.join("config.json"))
}

/// Expand a leading `~/` to the user's home directory
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir().map(|home| home.join(rest))
    } else {
        Some(PathBuf::from(path))
    }
}

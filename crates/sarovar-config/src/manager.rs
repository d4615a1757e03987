use crate::config::{Config, ConfigError, ConfigResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Loads, validates and persists the JSON config file
#[derive(Clone)]
pub struct ConfigManager {
    path: PathBuf,
    config: Arc<RwLock<Config>>,
    created: bool,
}

impl ConfigManager {
    /// Load the config file, writing defaults first when it does not exist
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            let manager = Self {
                path: path.to_path_buf(),
                config: Arc::new(RwLock::new(Config::default())),
                created: true,
            };
            manager.save().await?;
            return Ok(manager);
        }

        let content = tokio::fs::read_to_string(path).await?;
        let content = Self::expand_env_vars(&content)?;
        let config: Config = serde_json::from_str(&content)?;
        Self::validate(&config)?;

        Ok(Self {
            path: path.to_path_buf(),
            config: Arc::new(RwLock::new(config)),
            created: false,
        })
    }

    /// Clone of the current config
    pub async fn snapshot(&self) -> Config {
        self.config.read().await.clone()
    }

    /// Whether `load` wrote a fresh default file
    pub fn created(&self) -> bool {
        self.created
    }

    pub async fn save(&self) -> ConfigResult<()> {
        let config = self.config.read().await;
        let content = serde_json::to_string_pretty(&*config)?;
        drop(config);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    pub fn validate(config: &Config) -> ConfigResult<()> {
        if config.server.port == 0 {
            return Err(ConfigError::Validation(
                "Server port cannot be 0".to_string(),
            ));
        }

        if config.server.session_cookie.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Session cookie name cannot be empty".to_string(),
            ));
        }

        if config.chat.rate_limit == 0 || config.chat.rate_window_secs == 0 {
            return Err(ConfigError::Validation(
                "Chat rate limit and window must be greater than 0".to_string(),
            ));
        }

        if config.chat.max_history == 0 {
            return Err(ConfigError::Validation(
                "Chat max_history must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&config.llm.temperature) {
            return Err(ConfigError::Validation(format!(
                "LLM temperature {} outside 0.0..=2.0",
                config.llm.temperature
            )));
        }

        Ok(())
    }

    /// Expand `${VAR}` and `${VAR:-default}`
    fn expand_env_vars(content: &str) -> ConfigResult<String> {
        let mut result = content.to_string();

        for cap in ENV_VAR.captures_iter(content) {
            let full_match = &cap[0];
            let var_expr = &cap[1];

            let (var_name, default_value) = match var_expr.split_once(":-") {
                Some((name, default)) => (name, Some(default)),
                None => (var_expr, None),
            };

            let replacement = match std::env::var(var_name) {
                Ok(val) => val,
                Err(_) => match default_value {
                    Some(default) => default.to_string(),
                    None => return Err(ConfigError::EnvVarNotFound(var_name.to_string())),
                },
            };

            result = result.replace(full_match, &replacement);
        }

        Ok(result)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

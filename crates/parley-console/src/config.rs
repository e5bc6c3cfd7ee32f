use std::path::Path;

use parley_types::{Credentials, ModelEntry};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config.example.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default = "default_models")]
    pub models: Vec<ModelEntry>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            models: default_models(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "change-me-on-first-run".into(),
            token: "change-me-on-first-run".into(),
        }
    }
}

fn default_models() -> Vec<ModelEntry> {
    vec![ModelEntry::new("llama3", "General purpose chat model")]
}

impl Config {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.auth.username.clone(),
            password: self.auth.password.clone(),
            token: self.auth.token.clone(),
        }
    }

    pub fn site_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

pub fn try_load(path: &Path) -> Result<Config, ConfigError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

/// Load the config, falling back to defaults when it cannot be read or parsed.
pub fn load(path: &Path) -> Config {
    match try_load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            Config::default()
        }
    }
}

/// `--config <path>` from the command line, or the default path.
pub fn path_from_args(args: &[String]) -> String {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|idx| args.get(idx + 1))
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.into())
}

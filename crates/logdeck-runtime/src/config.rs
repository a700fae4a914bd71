use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the sessions log root based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LOGDECK_SESSIONS environment variable (with tilde expansion)
/// 3. `local.sessions_dir` from the loaded config
/// 4. ~/.logdeck/sessions
pub fn resolve_sessions_dir(explicit_path: Option<&str>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LOGDECK_SESSIONS") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(dir) = &config.local.sessions_dir {
        return Ok(dir.clone());
    }

    default_data_dir().map(|dir| dir.join("sessions"))
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".logdeck"))
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocalConfig {
    /// Override for the sessions log root.
    #[serde(default)]
    pub sessions_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RemoteConfig {
    #[serde(default)]
    pub server_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub auto_push: bool,
    /// `key:value` strings prepended to every push's tag list.
    #[serde(default)]
    pub default_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub local: LocalConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    /// Missing file means defaults; a present-but-invalid file is a
    /// configuration error, not silently defaulted.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(default_data_dir()?.join("config.toml"))
    }
}

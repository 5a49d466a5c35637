use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::ConnectionConfig;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub openproject: Option<OpenProjectConfig>,
    #[serde(default)]
    pub test_connection_on_startup: bool,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct OpenProjectConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub proxy: Option<String>,
}

impl AppConfig {
    /// The connection settings, if both URL and API key are known.
    pub fn connection(&self) -> Option<ConnectionConfig> {
        let op = self.openproject.as_ref()?;
        let url = non_empty(op.url.clone())?;
        let api_key = non_empty(op.api_key.clone())?;
        Some(ConnectionConfig::new(&url, &api_key, non_empty(op.proxy.clone())))
    }

    /// Overlays values from a variable lookup (normally the process environment).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let op = self.openproject.get_or_insert_with(OpenProjectConfig::default);
        if let Some(url) = non_empty(lookup("OPENPROJECT_URL")) {
            op.url = Some(url);
        }
        if let Some(key) = non_empty(lookup("OPENPROJECT_API_KEY")) {
            op.api_key = Some(key);
        }
        if let Some(proxy) = non_empty(lookup("OPENPROJECT_PROXY")) {
            op.proxy = Some(proxy);
        }
        if let Some(flag) = lookup("TEST_CONNECTION_ON_STARTUP") {
            self.test_connection_on_startup = flag.trim().eq_ignore_ascii_case("true");
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".openproject-mcp")
        .join("config.toml")
}

pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Config file, then `.env`, then the process environment.
pub fn load_config() -> Result<AppConfig> {
    let mut config = load_config_file(&config_path())?;
    // A missing .env is normal.
    let _ = dotenvy::dotenv();
    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}

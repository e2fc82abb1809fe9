//! Client configuration loading.
//!
//! Settings are layered: built-in defaults, then an optional TOML file under
//! the user's config directory, then `AGRIGUIDE_`-prefixed environment
//! variables. The recognized options are exactly `base_url` and `timeout_ms`.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Backend the client talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://project-backend-rw6p.onrender.com/api";

/// Overall request timeout applied to every call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Directory name under the user's config root.
const CONFIG_DIR: &str = "agriguide";

/// Settings for [`ApiClient`](crate::api::ApiClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend REST API, including the `/api` path.
    pub base_url: String,
    /// Transport timeout in milliseconds for each request.
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from defaults, the config file and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    fn load_from(path: PathBuf) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_ms", DEFAULT_TIMEOUT_MS)?
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("AGRIGUIDE").try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Construct a config pointing at an explicit backend, keeping the
    /// default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Location of the client configuration file.
pub fn config_path() -> PathBuf {
    config_root().join("config.toml")
}

/// Directory holding the config file and the cached session.
pub fn config_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Write a default config file if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    let path = config_path();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = format!(
        "base_url = \"{DEFAULT_BASE_URL}\"\ntimeout_ms = {DEFAULT_TIMEOUT_MS}\n"
    );
    fs::write(&path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn defaults_apply_when_no_file_exists() -> Result<()> {
        let dir = tempdir()?;
        let config = ClientConfig::load_from(dir.path().join("missing.toml"))?;
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        Ok(())
    }

    #[test]
    fn file_overrides_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"http://localhost:8080/api\"\n")?;
        let config = ClientConfig::load_from(path)?;
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        Ok(())
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CONFIG_FILE, DEFAULT_TIMEOUT_SECS, ENDPOINT_ENV, LEGACY_ENDPOINT_ENV};
use crate::error::Result;

/// Client settings, loadable from TOML. Every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prediction endpoint. Usually supplied through the environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Whole-request timeout. Zero disables it.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("sentiment/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load `path`, or `sentiment.toml` from the working directory if it
    /// exists, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    tracing::debug!("Using config file {}", local.display());
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply endpoint variables from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply endpoint variables from `lookup`. The primary variable wins over
    /// the legacy one; either wins over the file value. Blank values are
    /// ignored.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let from_env = [ENDPOINT_ENV, LEGACY_ENDPOINT_ENV]
            .into_iter()
            .find_map(|key| lookup(key).filter(|v| !v.trim().is_empty()));
        if let Some(endpoint) = from_env {
            self.endpoint = Some(endpoint);
        }
        self
    }

    /// Replace the endpoint when an explicit one is given.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint);
        }
        self
    }

    /// File, then environment, then explicit override.
    pub fn resolve(path: Option<&Path>, endpoint: Option<String>) -> Result<Self> {
        Ok(Self::load_or_default(path)?
            .with_env()
            .with_endpoint_override(endpoint))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;

/// Why a `counter-store` config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read counter-store config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("counter-store config '{path}' is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl Config {
    /// `{config_dir}/counter-store/config.toml`, or `./counter-store/config.toml`
    /// when the platform has no config directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("counter-store").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads and validates `path`. A missing file yields `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects a container name that would not map cleanly onto a single
    /// `{name}.json` file, and a log filter `EnvFilter` cannot parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = &self.persistence.container_name;
        let invalid_name = |reason: String| ConfigError::Invalid {
            field: "persistence.container_name",
            reason,
        };

        if name.trim().is_empty() {
            return Err(invalid_name("must not be empty".to_string()));
        }
        if name.trim() != name {
            return Err(invalid_name(format!(
                "'{}' has leading or trailing whitespace",
                name
            )));
        }
        if name.contains(['/', '\\']) {
            return Err(invalid_name(format!(
                "'{}' must not contain path separators",
                name
            )));
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::Invalid {
                field: "logging.filter",
                reason: format!("'{}': {}", self.logging.filter, e),
            });
        }

        Ok(())
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

/// Store behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Skip notifying subscribers when a dispatch leaves the state equal
    /// (default: false, every dispatch notifies).
    #[serde(default = "default_skip_repeats")]
    pub skip_repeats: bool,
}

/// Logging setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Write logs to `{file}.{timestamp}.{pid}` instead of stderr.
    /// `COUNTER_STORE_LOG` takes precedence.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Persistent container location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Container name; the document is stored as `{name}.json`.
    #[serde(default = "default_container_name")]
    pub container_name: String,
    /// Directory holding the container (default: platform data dir).
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_skip_repeats() -> bool {
    false
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_container_name() -> String {
    "counter_store".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            skip_repeats: default_skip_repeats(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            container_name: default_container_name(),
            directory: None,
        }
    }
}

impl PersistenceConfig {
    /// Configured directory, or `{data_dir}/counter-store`.
    /// Falls back to the current directory if data_dir is unavailable.
    pub fn resolved_directory(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("counter-store"),
        }
    }
}

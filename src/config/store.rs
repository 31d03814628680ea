//! Shared handle to the loaded configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// The loaded [`Config`] plus the file it came from, so the CLI and the
/// application glue can read it and pick up edits with [`reload`](Self::reload).
#[derive(Clone)]
pub struct ConfigStore {
    current: Arc<RwLock<Config>>,
    source: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, source: PathBuf) -> Self {
        Self {
            current: Arc::new(RwLock::new(config)),
            source,
        }
    }

    /// Load and validate `source`, then wrap it.
    pub fn open(source: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&source)?;
        Ok(Self::new(config, source))
    }

    /// Snapshot of the current config.
    pub fn get(&self) -> Config {
        self.current.read().clone()
    }

    /// Re-read the source file. An invalid file leaves the current config in place.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.source)?;
        tracing::info!(path = %self.source.display(), "config reloaded");
        *self.current.write() = config;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.source
    }
}

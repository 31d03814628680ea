//! Persistent container: a locked JSON document on disk.
//!
//! Boundary glue for the application lifecycle. The state container
//! never reads from or writes to it.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when loading or saving the container.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Persistent container '{path}' is locked by another process")]
    Locked { path: PathBuf },

    #[error("Persistent container '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A named key/value document stored as `{directory}/{name}.json`.
///
/// The file stays exclusively locked while the container is alive.
#[derive(Debug)]
pub struct PersistentContainer {
    name: String,
    path: PathBuf,
    file: File,
    document: Map<String, Value>,
    dirty: bool,
}

impl PersistentContainer {
    /// Open (or create) the container and take its lock.
    pub fn load(name: &str, directory: &Path) -> Result<Self, PersistenceError> {
        fs::create_dir_all(directory).map_err(|e| PersistenceError::Io {
            path: directory.to_path_buf(),
            source: e,
        })?;

        let path = directory.join(format!("{}.json", name));
        let io_err = |source| PersistenceError::Io {
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(io_err)?;

        if file.try_lock_exclusive().is_err() {
            return Err(PersistenceError::Locked { path: path.clone() });
        }

        let mut content = String::new();
        file.read_to_string(&mut content).map_err(io_err)?;

        let document = if content.trim().is_empty() {
            Map::new()
        } else {
            serde_json::from_str(&content).map_err(|e| PersistenceError::Corrupt {
                path: path.clone(),
                source: e,
            })?
        };

        tracing::info!(
            name,
            path = %path.display(),
            keys = document.len(),
            "persistent container loaded"
        );

        Ok(Self {
            name: name.to_string(),
            path,
            file,
            document,
            dirty: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Set `key`. Marks the container dirty only if the value changed.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if self.document.get(&key) != Some(&value) {
            self.document.insert(key, value);
            self.dirty = true;
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed = self.document.remove(key);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    pub fn has_changes(&self) -> bool {
        self.dirty
    }

    /// Write pending changes. No-op when nothing changed.
    pub fn save_context(&mut self) -> Result<(), PersistenceError> {
        if !self.dirty {
            return Ok(());
        }

        let path = self.path.clone();
        let io_err = |source| PersistenceError::Io {
            path: path.clone(),
            source,
        };

        let bytes = serde_json::to_vec_pretty(&self.document).map_err(|e| {
            PersistenceError::Corrupt {
                path: path.clone(),
                source: e,
            }
        })?;

        self.file.set_len(0).map_err(io_err)?;
        self.file.seek(SeekFrom::Start(0)).map_err(io_err)?;
        self.file.write_all(&bytes).map_err(io_err)?;
        self.file.sync_all().map_err(io_err)?;

        self.dirty = false;
        tracing::debug!(name = %self.name, "persistent container saved");
        Ok(())
    }
}

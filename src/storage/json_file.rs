use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, ErrorKind},
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use super::{KeyValueStore, StorageError};

/// A store backed by a single JSON object on disk.
///
/// The file is read once when the store is opened. Every write rewrites the
/// whole file, creating parent directories when they are missing.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let values = match File::open(&path) {
            Ok(file) => serde_json::from_reader(BufReader::new(file))?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(?path, entries = values.len(), "Opened preference file");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(level = "trace", skip(self), fields(path = ?self.path))]
    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(?parent, "Creating directory for preference file");
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.path)?;
        debug!(entries = self.values.len(), "Writing preference file");
        Ok(serde_json::to_writer_pretty(&file, &self.values)?)
    }

    /// Put `key` back the way it was after a failed write, so memory keeps
    /// matching the file.
    fn restore(&mut self, key: &str, previous: Option<String>) {
        match previous {
            Some(value) => {
                self.values.insert(key.to_string(), value);
            }
            None => {
                self.values.remove(key);
            }
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        self.flush().inspect_err(|_| self.restore(key, previous))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if let Some(previous) = self.values.remove(key) {
            self.flush()
                .inspect_err(|_| self.restore(key, Some(previous)))?;
        }
        Ok(())
    }
}

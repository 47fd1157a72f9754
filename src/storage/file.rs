use std::collections::BTreeMap;
use std::fs;
use std::io::{ ErrorKind, Write };
use std::path::{ Path, PathBuf };

use crate::error::StorageError;
use super::KeyValueStore;

/// JSON object of string values, used by native builds.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        // Write beside the target and rename so readers never see a partial file.
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        let json = serde_json::to_string_pretty(items).map_err(StorageError::write)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|err| StorageError::from(err.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = match self.read_all() {
            Ok(items) => items,
            Err(StorageError::Corrupt(msg)) => {
                log::warn!("Replacing corrupt settings file {}: {}", self.path.display(), msg);
                BTreeMap::new()
            }
            Err(err) => {
                return Err(err);
            }
        };
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }
}

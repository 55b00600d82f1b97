//! File-Backed Storage
//!
//! One JSON file per key inside a data directory. Used by native front ends.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::CartStorage;
use crate::error::{CartError, Result};

/// Directory-backed key-value store
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the entries live in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys never escape the data directory.
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CartError::PersistenceRead(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&tmp, value))
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|e| CartError::PersistenceWrite(format!("{}: {e}", path.display())))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CartError::PersistenceWrite(e.to_string())),
        }
    }
}

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::r#trait::{StateStore, StoreError};

/// One JSON file per slot under a directory (`<dir>/<slot>.json`).
///
/// Writes replace the whole file. There is no locking between processes.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl StateStore for FileStateStore {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_slot(&self, slot: &str, json: String) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(slot);
        fs::write(&path, json)?;
        debug!(path = %path.display(), "slot written");
        Ok(())
    }

    fn remove_slot(&self, slot: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

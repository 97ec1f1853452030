//! Single JSON file store with atomic replace.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use super::{check_format_version, PersistedState, StateStore};
use crate::error::{CartwiseError, Result};

/// Writes go to a temp file in the same directory and are renamed into
/// place while holding an exclusive advisory lock on `<path>.lock`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn open_lock(&self) -> Result<File> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(|err| CartwiseError::Storage(format!("open lock file: {err}")))
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl StateStore for JsonFileStore {
    fn save(&self, state: &PersistedState) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir)?;

        let lock = self.open_lock()?;
        FileExt::lock_exclusive(&lock)
            .map_err(|err| CartwiseError::Storage(format!("acquire exclusive lock: {err}")))?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, state)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|err| CartwiseError::Storage(format!("replace {}: {}", self.path.display(), err.error)))?;

        if let Err(err) = FileExt::unlock(&lock) {
            tracing::debug!("failed to release lock: {err}");
        }
        tracing::debug!(path = %self.path.display(), items = state.cart.len(), "saved cart");
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let lock = self.open_lock()?;
        FileExt::lock_shared(&lock)
            .map_err(|err| CartwiseError::Storage(format!("acquire shared lock: {err}")))?;
        let raw = fs::read_to_string(&self.path);
        if let Err(err) = FileExt::unlock(&lock) {
            tracing::debug!("failed to release lock: {err}");
        }

        let state: PersistedState = serde_json::from_str(&raw?)?;
        check_format_version(state.version, &self.path.display().to_string())?;
        Ok(Some(state))
    }
}

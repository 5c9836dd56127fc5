//! File-backed storage
//!
//! Each key is stored in `<dir>/<key>.json`. Writes go to a temporary file
//! that is fsynced and renamed over the target, then the directory is
//! fsynced, so a crash leaves either the old or the new value on disk.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::backend::{validate_key, StorageBackend};
use super::errors::{StorageError, StorageResult};

const FILE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Storage backend rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Opens the backend, creating `dir` if it does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                StorageError::io(format!("failed to create {}", dir.display()), e)
            })?;
        }
        Ok(Self { dir })
    }

    /// Returns the data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds `key`
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, FILE_EXTENSION)))
    }

    fn sync_dir(&self) -> StorageResult<()> {
        #[cfg(unix)]
        {
            let dir = OpenOptions::new().read(true).open(&self.dir).map_err(|e| {
                StorageError::io(format!("failed to open {}", self.dir.display()), e)
            })?;
            dir.sync_all().map_err(|e| {
                StorageError::io(format!("failed to fsync {}", self.dir.display()), e)
            })?;
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(
                format!("failed to read {}", path.display()),
                e,
            )),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension(format!("{}.{}", FILE_EXTENSION, TEMP_SUFFIX));

        let mut file = File::create(&tmp_path).map_err(|e| {
            StorageError::io(format!("failed to create {}", tmp_path.display()), e)
        })?;
        file.write_all(value.as_bytes()).map_err(|e| {
            StorageError::io(format!("failed to write {}", tmp_path.display()), e)
        })?;
        file.sync_all().map_err(|e| {
            StorageError::io(format!("failed to fsync {}", tmp_path.display()), e)
        })?;
        drop(file);

        fs::rename(&tmp_path, &path).map_err(|e| {
            StorageError::io(
                format!(
                    "failed to move {} to {}",
                    tmp_path.display(),
                    path.display()
                ),
                e,
            )
        })?;
        self.sync_dir()?;

        debug!(key, bytes = value.len(), path = %path.display(), "storage value written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => self.sync_dir(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(
                format!("failed to remove {}", path.display()),
                e,
            )),
        }
    }
}

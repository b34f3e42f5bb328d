//! Exclusive advisory lock on the database file.
//!
//! Only one worklog process may have a given database open. The lock lives
//! in a sibling `<db>.lock` file and is released when [`DatabaseLock`] drops.

use crate::constants::LOCK_FILE_SUFFIX;
use crate::errors::{AppResult, LockError};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Holds the lock for as long as it is alive.
#[derive(Debug)]
pub struct DatabaseLock {
    file: File,
    path: PathBuf,
}

impl DatabaseLock {
    /// Takes the lock for `db_path` without blocking.
    ///
    /// # Errors
    ///
    /// Returns `LockError::FileBusy` if another process holds the lock, or
    /// `LockError::AcquisitionFailed` if the lock file cannot be opened.
    pub fn acquire(db_path: &Path) -> AppResult<Self> {
        let path = lock_path_for(db_path);
        debug!("Acquiring lock at {:?}", path);

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: path.clone(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(DatabaseLock { file, path }),
            Err(e)
                if e.kind() == ErrorKind::WouldBlock
                    || e.raw_os_error() == fs2::lock_contended_error().raw_os_error() =>
            {
                Err(LockError::FileBusy { path }.into())
            }
            Err(source) => Err(LockError::AcquisitionFailed { path, source }.into()),
        }
    }

    /// Path of the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DatabaseLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!("Failed to release lock {:?}: {}", self.path, e);
        }
    }
}

fn lock_path_for(db_path: &Path) -> PathBuf {
    let mut name = db_path.as_os_str().to_os_string();
    name.push(LOCK_FILE_SUFFIX);
    PathBuf::from(name)
}

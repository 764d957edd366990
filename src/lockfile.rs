//! Cross-process mutual exclusion via an exclusive lock file.
//!
//! Exactly one instance may run against a given root at a time. The
//! primitive is the atomicity of exclusive file creation: whoever creates
//! `<root>/holo.pid` (or `/run/holo.pid` for the real root) holds the lock.

use std::fs::{File, OpenOptions};
use std::io::Write as _;

use crate::error::LockError;
use crate::logging::Logger;
use crate::paths::CleanPath;

/// Lock file location for the real root directory.
const ROOT_LOCK_PATH: &str = "/run/holo.pid";

/// Lock file name beneath an overridden root directory.
const LOCK_FILE_NAME: &str = "holo.pid";

/// An exclusive lock scoped to a root directory.
///
/// Held for the remainder of the process once acquired; released explicitly
/// via [`LockFile::release`] (which reports sub-step failures) or quietly by
/// the `Drop` backstop.
#[derive(Debug)]
pub struct LockFile {
    path: CleanPath,
    handle: Option<File>,
}

impl LockFile {
    /// Acquire the lock for `root`.
    ///
    /// The file is created exclusively; an existing file means another
    /// instance holds the lock. On success the current process id is
    /// written and synced — best-effort only, the content is informational.
    ///
    /// # Errors
    ///
    /// [`LockError::AlreadyRunning`] when the lock file already exists,
    /// [`LockError::Io`] for any other creation failure.
    pub fn acquire(root: &CleanPath) -> Result<Self, LockError> {
        let path = lock_path(root);

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt as _;
            options.mode(0o644);
        }

        match options.open(&path) {
            Ok(mut file) => {
                let _ = writeln!(file, "{}", std::process::id());
                let _ = file.sync_all();
                Ok(Self {
                    path,
                    handle: Some(file),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(LockError::AlreadyRunning {
                    path: path.as_str().to_string(),
                })
            }
            Err(source) => Err(LockError::Io {
                path: path.as_str().to_string(),
                source,
            }),
        }
    }

    /// Path of the lock file.
    #[must_use]
    pub fn path(&self) -> &CleanPath {
        &self.path
    }

    /// Whether the lock is currently held.
    #[must_use]
    pub fn is_acquired(&self) -> bool {
        self.handle.is_some()
    }

    /// Release the lock: close the handle and remove the file.
    ///
    /// A no-op if the lock was never acquired or already released. Either
    /// sub-step failing is reported through `log`, never raised.
    pub fn release(&mut self, log: &Logger) {
        let Some(file) = self.handle.take() else {
            return;
        };
        if let Err(e) = file.sync_all() {
            log.warn(&format!("Cannot close lock file {}: {e}", self.path));
        }
        drop(file);
        if let Err(e) = std::fs::remove_file(&self.path) {
            log.warn(&format!("Cannot remove lock file {}: {e}", self.path));
        }
    }
}

/// Where the lock for `root` lives: `/run/holo.pid` for the real root,
/// `<root>/holo.pid` otherwise.
fn lock_path(root: &CleanPath) -> CleanPath {
    if root.is_root() {
        CleanPath::new(ROOT_LOCK_PATH)
    } else {
        root.join(LOCK_FILE_NAME)
    }
}

impl Drop for LockFile {
    /// Backstop release for exit paths that never called
    /// [`LockFile::release`]; failures cannot be reported here.
    fn drop(&mut self) {
        if self.handle.take().is_some() {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

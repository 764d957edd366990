//! Domain-specific error types for the bootstrap layer.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Bootstrap internals return typed errors ([`ConfigError`], [`LockError`])
//! while the command layer surfaces them as [`HoloError`], which the entry
//! point maps to distinct process exit codes.
//!
//! # Error hierarchy
//!
//! ```text
//! HoloError
//! ├── ConfigInvalid          — bootstrap finished with problems (already reported)
//! └── Lock(LockError)        — lock file could not be acquired
//!
//! ConfigError                — reported per occurrence during bootstrap
//! ```

use thiserror::Error;

/// Top-level error type for a bootstrap run.
#[derive(Error, Debug)]
pub enum HoloError {
    /// The configuration bootstrap finished with one or more problems.
    ///
    /// The individual problems were already reported when they were
    /// encountered; this variant only carries the overall verdict.
    #[error("configuration is invalid")]
    ConfigInvalid,

    /// The lock file could not be acquired.
    #[error(transparent)]
    Lock(#[from] LockError),
}

/// Errors that arise while preparing the root/cache directories or reading
/// the directive file.
///
/// Each is reported to the user at the point it occurs; unrecognized
/// directives do not stop parsing, everything else is fatal for its phase.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A stale cache path could not be removed.
    #[error("Cannot remove {path}: {cause}")]
    CacheRemove {
        /// Path of the cache entry that could not be removed.
        path: String,
        /// Rendered underlying cause (may itself be a chain).
        cause: String,
    },

    /// The cache directory could not be (re)created.
    #[error("Cannot create {path}: {source}")]
    CacheCreate {
        /// Path of the directory that could not be created.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The directive file could not be opened.
    #[error("open {path}: {source}")]
    HolorcOpen {
        /// Path of the directive file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A non-empty, non-comment line did not match any known directive.
    #[error("read {path}: unrecognized line: {line}")]
    UnrecognizedDirective {
        /// Path of the directive file.
        path: String,
        /// The offending line, already trimmed.
        line: String,
    },
}

/// Errors that arise from lock-file acquisition.
#[derive(Error, Debug)]
pub enum LockError {
    /// The lock file already exists — another instance is likely running.
    #[error("Cannot create lock file {path}: file exists")]
    AlreadyRunning {
        /// Path of the lock file.
        path: String,
    },

    /// Any other failure to create the lock file.
    #[error("Cannot create lock file {path}: {source}")]
    Io {
        /// Path of the lock file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

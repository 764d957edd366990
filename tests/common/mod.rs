// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed root tree and a fluent builder so
// each integration test can set up an isolated environment without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::path::Path;

use holo::config::Config;
use holo::logging::Logger;
use holo::paths::CleanPath;

/// An isolated root tree backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped (via the underlying
/// [`tempfile::TempDir`]).
pub struct TestRoot {
    /// Temporary directory serving as the root directory override.
    pub root: tempfile::TempDir,
}

impl TestRoot {
    /// Create a root tree containing an empty `etc/holorc`.
    pub fn new() -> Self {
        TestRootBuilder::new().build()
    }

    /// Path to the root directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// The root directory as a string slice.
    pub fn as_str(&self) -> &str {
        self.root.path().to_str().expect("temp path is UTF-8")
    }

    /// The root directory as a [`CleanPath`].
    pub fn clean_path(&self) -> CleanPath {
        CleanPath::new(self.as_str())
    }

    /// Bootstrap a [`Config`] against this root with a quiet logger.
    pub fn bootstrap(&self) -> Config {
        Config::init_with_root(Some(self.as_str()), &Logger::new(false))
    }
}

/// Fluent builder for [`TestRoot`].
pub struct TestRootBuilder {
    root: tempfile::TempDir,
    holorc: Option<String>,
}

impl TestRootBuilder {
    /// Begin building a new root tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            holorc: Some(String::new()),
        }
    }

    /// Use `content` as the `etc/holorc` body.
    pub fn with_holorc(mut self, content: &str) -> Self {
        self.holorc = Some(content.to_string());
        self
    }

    /// Do not create `etc/holorc` at all.
    pub fn without_holorc(mut self) -> Self {
        self.holorc = None;
        self
    }

    /// Pre-populate the cache directory with a stale file at
    /// `tmp/holo-cache/<name>`.
    pub fn with_stale_cache_file(self, name: &str) -> Self {
        let cache = self.root.path().join("tmp/holo-cache");
        std::fs::create_dir_all(&cache).expect("create stale cache dir");
        std::fs::write(cache.join(name), b"stale").expect("write stale cache file");
        self
    }

    /// Finish building and return the configured root tree.
    pub fn build(self) -> TestRoot {
        if let Some(content) = &self.holorc {
            let etc = self.root.path().join("etc");
            std::fs::create_dir_all(&etc).expect("create etc dir");
            std::fs::write(etc.join("holorc"), content).expect("write holorc");
        }
        TestRoot { root: self.root }
    }
}

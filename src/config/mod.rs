//! Configuration bootstrap: root resolution, cache lifecycle, directive
//! parsing.
//!
//! [`Config`] is built once per run in two phases. Phase 1 resolves the root
//! directory and recreates the cache directory beneath it; phase 2 parses
//! the directive file into an ordered plugin list. Problems are reported as
//! they are encountered and folded into a single validity flag, so one run
//! surfaces every broken directive at once.

pub mod holorc;
pub mod plugin;

use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConfigError;
use crate::fsutil;
use crate::logging::Logger;
use crate::paths::CleanPath;

use self::plugin::Plugin;

/// Environment variable overriding the root directory.
pub const ROOT_DIR_ENV: &str = "HOLO_ROOT_DIR";

/// Cache directory location, relative to the root directory.
const CACHE_SUBDIR: &str = "tmp/holo-cache";

/// Directive file location, relative to the root directory.
const HOLORC_SUBDIR: &str = "etc/holorc";

/// The environment and plugin selection for the current run.
///
/// Sole owner of the plugin list. The cache directory is an on-disk side
/// effect of construction; [`Config::cleanup`] tears it down at the end of
/// the run regardless of validity.
#[derive(Debug)]
pub struct Config {
    /// Root directory the run operates against (usually `/`).
    pub root_dir: CleanPath,
    /// Scratch directory, recreated during bootstrap.
    pub cache_dir: CleanPath,
    /// Plugins in execution order.
    pub plugins: Vec<Plugin>,
    /// Whether the bootstrap finished without problems.
    pub is_valid: bool,
}

impl Config {
    /// Bootstrap a configuration for the current process environment.
    ///
    /// Reads the root override from [`ROOT_DIR_ENV`]; problems are reported
    /// through `log` and reflected in [`Config::is_valid`] rather than
    /// returned, so the caller always gets a `Config` it can tear down.
    #[must_use]
    pub fn init(log: &Logger) -> Self {
        let root_override = std::env::var(ROOT_DIR_ENV).ok();
        Self::init_with_root(root_override.as_deref(), log)
    }

    /// Bootstrap with an explicit root override (`None`/empty means none).
    ///
    /// Without an override the root is `/` and the cache is the fixed
    /// `/tmp/holo-cache`; with one, the override is cleaned and the cache
    /// derived as `<root>/tmp/holo-cache`. The two derivations are kept
    /// deliberately asymmetric for compatibility with existing setups.
    #[must_use]
    pub fn init_with_root(root_override: Option<&str>, log: &Logger) -> Self {
        // Phase 1: resolve the root and recreate the cache directory.
        let (root_dir, cache_dir) = resolve_dirs(root_override);

        let mut is_valid = match reset_cache_dir(&cache_dir) {
            Ok(()) => true,
            Err(e) => {
                log.error(&e.to_string());
                false
            }
        };

        let mut plugins = Vec::new();

        // Phase 2: parse the directive file. Only attempted once phase 1
        // succeeded; a failed open terminates it immediately.
        if is_valid {
            let rc_path = root_dir.join(HOLORC_SUBDIR);
            match holorc::parse(rc_path.as_ref(), &root_dir) {
                Ok(outcome) => {
                    for line in &outcome.unrecognized {
                        let e = ConfigError::UnrecognizedDirective {
                            path: rc_path.as_str().to_string(),
                            line: line.clone(),
                        };
                        log.error(&e.to_string());
                    }
                    is_valid = outcome.is_complete();
                    plugins = outcome.plugins;
                }
                Err(e) => {
                    log.error(&e.to_string());
                    is_valid = false;
                }
            }
        }

        Self {
            root_dir,
            cache_dir,
            plugins,
            is_valid,
        }
    }

    /// Best-effort removal of the cache directory.
    ///
    /// Runs at the end of every run, valid or not. A cache that never came
    /// into existence is tolerated; any other failure is reported and never
    /// raised.
    pub fn cleanup(&self, log: &Logger) {
        match fsutil::unlink_tree(self.cache_dir.as_ref()) {
            Ok(()) => {}
            Err(e) if is_not_found(&e) => {}
            Err(e) => log.warn(&format!("Cannot remove {}: {e:#}", self.cache_dir)),
        }
    }
}

/// Derive the root and cache directories from an optional root override.
///
/// No override (or an empty one) means root `/` with the fixed cache path
/// `/tmp/holo-cache`; an override is cleaned and the cache joined beneath
/// it. The asymmetry is long-standing behavior that existing setups rely on.
fn resolve_dirs(root_override: Option<&str>) -> (CleanPath, CleanPath) {
    match root_override {
        Some(raw) if !raw.is_empty() => {
            let root = CleanPath::new(raw);
            let cache = root.join(CACHE_SUBDIR);
            (root, cache)
        }
        _ => (CleanPath::new("/"), CleanPath::new("/tmp/holo-cache")),
    }
}

/// Remove whatever sits at the cache path, then recreate it as an empty
/// directory (creating missing parents).
fn reset_cache_dir(cache_dir: &CleanPath) -> Result<(), ConfigError> {
    let path: &Path = cache_dir.as_ref();

    match std::fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            fsutil::unlink_tree(path).map_err(|e| ConfigError::CacheRemove {
                path: cache_dir.as_str().to_string(),
                cause: format!("{e:#}"),
            })?;
        }
        Ok(_) => {
            std::fs::remove_file(path).map_err(|e| ConfigError::CacheRemove {
                path: cache_dir.as_str().to_string(),
                cause: e.to_string(),
            })?;
        }
        // Does not exist: nothing to remove.
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(ConfigError::CacheRemove {
                path: cache_dir.as_str().to_string(),
                cause: e.to_string(),
            });
        }
    }

    std::fs::create_dir_all(path).map_err(|source| ConfigError::CacheCreate {
        path: cache_dir.as_str().to_string(),
        source,
    })
}

/// Whether an error chain bottoms out in "file not found".
fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == ErrorKind::NotFound)
}

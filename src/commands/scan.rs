//! Command: bootstrap the environment and list the resolved plugins.

use crate::config::Config;
use crate::error::HoloError;
use crate::lockfile::LockFile;
use crate::logging::Logger;

/// Run the scan command.
///
/// Bootstraps the configuration, acquires the per-root lock, reports every
/// resolved plugin in execution order, then releases the lock. Cache
/// teardown runs on every exit path after bootstrap. Note that the
/// bootstrap itself runs before the lock is held, so two instances can
/// still race on cache recreation; the lock protects everything after it.
///
/// # Errors
///
/// [`HoloError::ConfigInvalid`] when the bootstrap reported problems,
/// [`HoloError::Lock`] when the lock could not be acquired.
pub fn run(log: &Logger) -> Result<(), HoloError> {
    log.stage("Loading configuration");
    let cfg = Config::init(log);

    let result = scan_locked(&cfg, log);
    cfg.cleanup(log);
    result
}

/// The lock-guarded part of the scan.
fn scan_locked(cfg: &Config, log: &Logger) -> Result<(), HoloError> {
    if !cfg.is_valid {
        return Err(HoloError::ConfigInvalid);
    }

    log.debug(&format!("root dir = {}", cfg.root_dir));

    let mut lock = LockFile::acquire(&cfg.root_dir)?;

    log.stage("Scanning plugins");
    for plugin in &cfg.plugins {
        log.info(&format!(
            "found plugin {} at {}",
            plugin.identifier, plugin.executable_path
        ));
    }

    lock.release(log);
    Ok(())
}

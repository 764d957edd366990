//! Environment bootstrap for declarative configuration management.
//!
//! Before any configuration work happens, this layer locates and validates
//! a target root filesystem, provisions (and later tears down) a scratch
//! cache beneath it, parses the `etc/holorc` directive file into an ordered
//! list of resolved plugins, and guarantees single-instance operation per
//! root via an exclusive lock file.
//!
//! The public API is organised leaf-first:
//!
//! - **[`paths`]** — canonical path values (clean + join)
//! - **[`fsutil`]** — recursive directory-tree removal
//! - **[`config`]** — two-phase bootstrap: root/cache preparation, directive parsing
//! - **[`lockfile`]** — cross-process mutual exclusion per root
//! - **[`commands`]** — top-level subcommand orchestration (`scan`, `version`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod lockfile;
pub mod logging;
pub mod paths;

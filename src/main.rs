use std::process::ExitCode;

use clap::Parser;

use holo::cli;
use holo::commands;
use holo::error::{HoloError, LockError};
use holo::logging::Logger;

/// Exit status for an invalid configuration (sysexits EX_CONFIG).
const EX_CONFIG: u8 = 78;

/// Exit status when the lock is unavailable (sysexits EX_UNAVAILABLE).
const EX_UNAVAILABLE: u8 = 69;

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    let log = Logger::new(args.verbose);

    let result = match args.command {
        cli::Command::Scan => commands::scan::run(&log),
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ HoloError::ConfigInvalid) => {
            log.error(&e.to_string());
            ExitCode::from(EX_CONFIG)
        }
        Err(HoloError::Lock(e)) => {
            log.error(&e.to_string());
            if matches!(e, LockError::AlreadyRunning { .. }) {
                log.info("This usually means that another instance of holo is currently running.");
                log.info("If not, you can try to delete the lock file manually.");
            }
            ExitCode::from(EX_UNAVAILABLE)
        }
    }
}

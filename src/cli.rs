use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the holo bootstrap.
#[derive(Parser, Debug)]
#[command(
    name = "holo",
    about = "Environment bootstrap for declarative configuration management",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the configuration and list the resolved plugins
    Scan,
    /// Print version information
    Version,
}

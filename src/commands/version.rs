//! Command: print version information.

/// Print the holo version to stdout.
pub fn run() {
    let version = option_env!("HOLO_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    println!("holo {version}");
}

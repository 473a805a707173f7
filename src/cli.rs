//! Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Browse a small catalog of peripheral devices from the console
#[derive(Parser, Debug)]
#[command(name = "peripheral-catalog")]
#[command(version)]
#[command(about = "List peripheral devices and show the details of one", long_about = None)]
pub struct Args {
    /// TOML catalog to load instead of the built-in devices
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides RUST_LOG and the catalog)
    #[arg(short, long, value_parser = ["error", "warn", "info", "debug", "trace", "off"])]
    pub log_level: Option<String>,
}

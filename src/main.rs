//! Console entry point: load the catalog, build devices through their
//! factories, and answer one menu selection.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, debug, info};
use peripheral_catalog::{CatalogConfig, ConsoleSession, DeviceManager, cli::Args};
use std::io::{self, Write};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.catalog {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => CatalogConfig::builtin(),
    };

    init_logging(args.log_level.as_deref(), &config.log_level);

    info!(
        "catalog: {} device(s) from {}",
        config.devices.len(),
        args.catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in list".to_string())
    );

    let factories = config.factories().context("invalid catalog")?;
    let mut manager = DeviceManager::new();
    manager.populate(&factories);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let outcome = ConsoleSession::new(&manager).run(stdin.lock(), &mut stdout)?;
    debug!("session ended: {:?}", outcome);

    Ok(())
}

/// Logs go to stderr so the menu on stdout stays clean.
///
/// An explicit `--log-level` wins; otherwise `RUST_LOG`, then the catalog's
/// `log_level`.
fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let mut builder = match cli_level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(parse_level(level));
            builder
        }
        None => Builder::from_env(env_logger::Env::default().default_filter_or(config_level)),
    };

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

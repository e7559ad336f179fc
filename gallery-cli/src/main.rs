mod cli;
mod commands;
mod config;
mod error;
mod paths;

use std::fs::{self, File};
use std::io;

use clap::Parser;
use log::{LevelFilter, error, info};
use simplelog::{Config as LogConfig, WriteLogger};

use crate::cli::{Cli, Command};
use crate::config::Config;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(level(cli.verbose, &config));

    let mut stdout = io::stdout().lock();
    let result = match &cli.command {
        Command::Table(args) => {
            info!("table {}", args.records.display());
            commands::table::run(args, &config, &mut stdout)
        }
        Command::Tree(args) => {
            info!("tree {}", args.options.display());
            commands::tree::run(args, &mut stdout)
        }
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `-v` flags win over the configured level.
fn level(verbose: u8, config: &Config) -> LevelFilter {
    match verbose {
        0 => config.level_filter().unwrap_or(LevelFilter::Info),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Log to `latest.log` in the cache directory, rotating the previous run's log.
///
/// Logging is skipped when no cache directory is available.
fn init_logging(level: LevelFilter) {
    let (Some(cache), Some(path)) = (paths::cache_dir(), paths::log_file()) else {
        eprintln!("Warning: no cache directory, logging disabled");
        return;
    };
    if let Err(e) = fs::create_dir_all(&cache) {
        eprintln!("Warning: cannot create {}: {}", cache.display(), e);
        return;
    }
    paths::rotate_logs(&cache);

    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, LogConfig::default(), file) {
                eprintln!("Warning: failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: cannot create {}: {}", path.display(), e),
    }
}

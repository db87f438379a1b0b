pub mod aggregate;
pub mod cli;
pub mod colors;
pub mod diagnostics;
pub mod export;
pub mod io_utils;
pub mod normalize;
pub mod pipeline;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("orders_rollup", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Summarize(args) => pipeline::execute(&args),
        Commands::Normalize(args) => normalize::execute(&args),
        Commands::Palette(args) => colors::execute(&args),
    }
}

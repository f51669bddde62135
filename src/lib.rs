//! ttviewer library root.
//! Exposes the CLI parser, the high-level run() function and the timetable
//! core (loader, period detection, aggregation, view gate).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod timetable;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Check => cli::commands::check::handle(cli, cfg),
        Commands::Teachers { .. } => cli::commands::teachers::handle(cli, cfg),
        Commands::View { .. } => cli::commands::view::handle(cli, cfg),
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::Reset => cli::commands::reset::handle(cli, cfg),
        Commands::End => cli::commands::end::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cli, cfg),
        Commands::Shell => cli::commands::shell::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(file) = &cli.file {
        cfg.timetable_file = file.clone();
    }

    dispatch(&cli, &cfg)
}

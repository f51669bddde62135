pub mod check;
pub mod config;
pub mod end;
pub mod init;
pub mod log;
pub mod reset;
pub mod shell;
pub mod status;
pub mod teachers;
pub mod view;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::gate::AttemptGate;
use crate::errors::AppResult;
use crate::timetable::Timetable;
use crate::timetable::loader::{Source, Upload};
use crate::ui::messages::notice;
use crate::utils::colors::{RESET, color_for_remaining};
use crate::utils::path::expand_tilde;
use std::io;

/// Build the timetable source from config and global flags, then load it.
pub(crate) fn open_timetable(cli: &Cli, cfg: &Config) -> AppResult<Timetable> {
    let upload = match cli.upload.as_deref() {
        None => None,
        Some("-") => Some(Upload::from_reader(io::stdin().lock())?),
        Some(p) => Some(Upload::from_path(&expand_tilde(p))?),
    };

    let source = Source {
        path: Some(expand_tilde(&cfg.timetable_file)),
        upload,
        sheet: cfg.sheet.clone(),
    };

    Timetable::open(&source, cfg.default_period_count)
}

/// Status footer plus the advisory when few views are left.
pub(crate) fn print_status(gate: &AttemptGate) {
    let color = color_for_remaining(gate.remaining());
    println!("{color}{}{RESET}", gate.status_line());
    if let Some(n) = gate.advisory() {
        notice(&n);
    }
}

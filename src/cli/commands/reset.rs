use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::sessions::{load_session, save_session};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `reset` command: put the session back to zero views.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let mut gate = load_session(&pool.conn, &cli.session, cfg.max_attempts)?;
    let before = gate.successful_views();

    gate.reset();
    save_session(&pool.conn, &cli.session, &gate)?;

    ttlog_quiet(
        &pool.conn,
        "reset",
        &cli.session,
        &format!("Counter reset (was {before})"),
    );
    success(format!("Session '{}' reset: {}", cli.session, gate.status_line()));
    Ok(())
}

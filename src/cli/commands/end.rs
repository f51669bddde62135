use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::sessions::delete_session;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `end` command: the session and its counter are discarded.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    if delete_session(&pool.conn, &cli.session)? {
        ttlog_quiet(&pool.conn, "end", &cli.session, "Session ended");
        success(format!("Session '{}' ended.", cli.session));
    } else {
        info(format!("No active session named '{}'.", cli.session));
    }
    Ok(())
}

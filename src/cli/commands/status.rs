use crate::cli::commands::print_status;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::sessions::load_session;
use crate::errors::AppResult;
use crate::ui::messages::notice;

/// Handle the `status` command (read-only).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let gate = load_session(&pool.conn, &cli.session, cfg.max_attempts)?;

    println!("Session: {}", cli.session);
    if gate.locked() {
        notice(&gate.block_notice());
    }
    print_status(&gate);
    println!("Locked: {}", if gate.locked() { "yes" } else { "no" });
    Ok(())
}

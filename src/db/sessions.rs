//! Stored attempt gates, one row per named session.

use crate::core::gate::AttemptGate;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Gate for `id`; an unknown session starts fresh.
pub fn load_session(conn: &Connection, id: &str, max_attempts: u32) -> AppResult<AttemptGate> {
    let row: Option<(i64, bool)> = conn
        .query_row(
            "SELECT successful_views, locked FROM sessions WHERE id = ?1",
            params![id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    Ok(match row {
        Some((views, locked)) => {
            let views = u32::try_from(views).unwrap_or(u32::MAX);
            AttemptGate::restore(views, locked, max_attempts)
        }
        None => AttemptGate::with_limit(max_attempts),
    })
}

/// Insert or update the stored state of `id`.
pub fn save_session(conn: &Connection, id: &str, gate: &AttemptGate) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO sessions (id, successful_views, locked, started_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?4)
         ON CONFLICT(id) DO UPDATE SET
            successful_views = excluded.successful_views,
            locked = excluded.locked,
            updated_at = excluded.updated_at",
        params![id, gate.successful_views(), gate.locked(), now],
    )?;
    Ok(())
}

/// Drop the session; returns whether it existed.
pub fn delete_session(conn: &Connection, id: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM sessions WHERE id = ?1", params![id])?;
    Ok(n > 0)
}

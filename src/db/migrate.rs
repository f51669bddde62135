use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `sessions` table exists.
fn sessions_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='sessions'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `sessions` table holding one attempt gate per session id.
fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id               TEXT PRIMARY KEY,
            successful_views INTEGER NOT NULL DEFAULT 0 CHECK(successful_views >= 0),
            locked           INTEGER NOT NULL DEFAULT 0 CHECK(locked IN (0, 1)),
            started_at       TEXT NOT NULL,
            updated_at       TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: bring the schema up to date.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !sessions_table_exists(conn)? {
        create_sessions_table(conn)?;
    }

    Ok(())
}

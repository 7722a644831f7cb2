use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS mood_entries (
            id          INTEGER PRIMARY KEY,
            mood        TEXT,
            timestamp   DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS journal_entries (
            id          INTEGER PRIMARY KEY,
            entry       TEXT,
            timestamp   DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}

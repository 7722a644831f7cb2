use crate::Database;
use crate::models::{JournalRow, MoodRow};
use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use serene_types::models::MoodLabel;

/// SQLite's `CURRENT_TIMESTAMP` layout.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The two append-only logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Log {
    Mood,
    Journal,
}

impl Log {
    fn table(self) -> &'static str {
        match self {
            Self::Mood => "mood_entries",
            Self::Journal => "journal_entries",
        }
    }
}

impl Database {
    // -- Mood log --

    pub fn insert_mood(&self, mood: MoodLabel) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute("INSERT INTO mood_entries (mood) VALUES (?1)", [mood.as_str()])?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Insert with an explicit timestamp instead of the store clock.
    pub fn insert_mood_at(&self, mood: MoodLabel, at: NaiveDateTime) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO mood_entries (mood, timestamp) VALUES (?1, ?2)",
                (mood.as_str(), at.format(TIMESTAMP_FORMAT).to_string()),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn recent_moods(&self, limit: u32) -> Result<Vec<MoodRow>> {
        self.with_conn(|conn| query_moods(conn, limit))
    }

    // -- Journal log --

    pub fn insert_journal(&self, entry: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute("INSERT INTO journal_entries (entry) VALUES (?1)", [entry])?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn insert_journal_at(&self, entry: &str, at: NaiveDateTime) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO journal_entries (entry, timestamp) VALUES (?1, ?2)",
                (entry, at.format(TIMESTAMP_FORMAT).to_string()),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn recent_journal(&self, limit: u32) -> Result<Vec<JournalRow>> {
        self.with_conn(|conn| query_journal(conn, limit))
    }

    // -- Progress --

    /// Number of distinct calendar dates with at least one entry.
    pub fn day_count(&self, log: Log) -> Result<u32> {
        self.with_conn(|conn| {
            let sql = format!("SELECT COUNT(DISTINCT DATE(timestamp)) FROM {}", log.table());
            let count: u32 = conn.query_row(&sql, [], |row| row.get(0))?;
            Ok(count)
        })
    }

    pub fn mood_day_count(&self) -> Result<u32> {
        self.day_count(Log::Mood)
    }

    pub fn journal_day_count(&self) -> Result<u32> {
        self.day_count(Log::Journal)
    }

    /// The distinct active dates themselves, newest first.
    pub fn active_days(&self, log: Log) -> Result<Vec<NaiveDate>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT DISTINCT DATE(timestamp) AS day FROM {}
                 WHERE timestamp IS NOT NULL
                 ORDER BY day DESC",
                log.table()
            );
            let mut stmt = conn.prepare(&sql)?;
            let days = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            days.iter()
                .map(|d| {
                    NaiveDate::parse_from_str(d, "%Y-%m-%d")
                        .map_err(|e| anyhow!("Corrupt date '{}' in {}: {}", d, log.table(), e))
                })
                .collect()
        })
    }
}

fn query_moods(conn: &Connection, limit: u32) -> Result<Vec<MoodRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, mood, timestamp FROM mood_entries
         ORDER BY timestamp DESC, id DESC
         LIMIT ?1",
    )?;

    let rows = stmt
        .query_map([limit], |row| {
            Ok(MoodRow {
                id: row.get(0)?,
                mood: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                timestamp: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_journal(conn: &Connection, limit: u32) -> Result<Vec<JournalRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, entry, timestamp FROM journal_entries
         ORDER BY timestamp DESC, id DESC
         LIMIT ?1",
    )?;

    let rows = stmt
        .query_map([limit], |row| {
            Ok(JournalRow {
                id: row.get(0)?,
                entry: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                timestamp: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

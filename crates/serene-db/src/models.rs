/// Database row types. Timestamps are kept as the raw SQLite text
/// (`YYYY-MM-DD HH:MM:SS`, UTC); conversion happens at the API edge.

pub struct MoodRow {
    pub id: i64,
    pub mood: String,
    pub timestamp: String,
}

pub struct JournalRow {
    pub id: i64,
    pub entry: String,
    pub timestamp: String,
}

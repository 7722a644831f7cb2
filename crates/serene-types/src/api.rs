use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::MoodLabel;

// -- Menu --

#[derive(Debug, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MenuResponse {
    pub views: Vec<MenuItem>,
}

/// User-visible warning returned when a submission is rejected.
#[derive(Debug, Serialize, Deserialize)]
pub struct WarningResponse {
    pub message: String,
}

// -- Mood & journal --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoodRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodResponse {
    pub id: i64,
    pub label: MoodLabel,
    pub polarity: f64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JournalRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JournalResponse {
    pub id: i64,
    pub label: MoodLabel,
    pub polarity: f64,
    pub message: String,
}

// -- Breathing --

#[derive(Debug, Serialize, Deserialize)]
pub struct BreathingResponse {
    pub index: usize,
    pub step: String,
    pub auto_advancing: bool,
}

// -- Tips --

#[derive(Debug, Serialize, Deserialize)]
pub struct TipsResponse {
    pub tips: Vec<String>,
}

// -- Games --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorGuessRequest {
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColorGameResponse {
    pub prompt: String,
    pub target: String,
    pub colors: Vec<String>,
    pub result: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColorGuessResponse {
    pub correct: bool,
    pub result: String,
    pub game: ColorGameResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemoryBoardResponse {
    /// Face value for revealed cells, `None` for hidden ones.
    pub cells: Vec<Option<u8>>,
    pub matched: Vec<bool>,
    pub pairs_found: usize,
    pub moves: u32,
    pub won: bool,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemoryClickResponse {
    pub outcome: String,
    pub board: MemoryBoardResponse,
}

// -- Progress --

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub mood_days: u32,
    pub journal_days: u32,
    pub mood_dates: Vec<NaiveDate>,
    pub journal_dates: Vec<NaiveDate>,
}

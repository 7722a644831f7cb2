use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use serene_core::classify;
use serene_types::api::{MoodRequest, MoodResponse};
use serene_types::models::{MoodEntry, MoodLabel};

use crate::{AppState, EntryQuery, blocking, parse_timestamp, warning};

/// POST /mood — classify the text and log the resulting label.
/// Blank text is answered with a warning and nothing is written.
pub async fn analyze_mood(
    State(state): State<AppState>,
    Json(req): Json<MoodRequest>,
) -> Result<Response, StatusCode> {
    let reading = match classify(&req.text, state.analyzer.as_ref()) {
        Ok(reading) => reading,
        Err(e) => {
            warn!("Rejected mood submission: {}", e);
            return Ok(warning(e.to_string()));
        }
    };

    let db = state.clone();
    let label = reading.label;
    let id = blocking("insert_mood", move || db.db.insert_mood(label)).await?;
    info!("Mood entry {} logged as {}", id, label);

    Ok((
        StatusCode::CREATED,
        Json(MoodResponse {
            id,
            label,
            polarity: reading.polarity,
            message: reading.message.to_string(),
        }),
    )
        .into_response())
}

/// GET /mood — most recent mood entries, newest first.
pub async fn list_moods(
    State(state): State<AppState>,
    Query(query): Query<EntryQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let limit = query.clamped();
    let rows = blocking("recent_moods", move || db.db.recent_moods(limit)).await?;

    let entries: Vec<MoodEntry> = rows
        .into_iter()
        .map(|row| MoodEntry {
            id: row.id,
            mood: MoodLabel::from_db(&row.mood).unwrap_or_else(|| {
                warn!("Unknown mood '{}' on entry {}", row.mood, row.id);
                MoodLabel::Neutral
            }),
            timestamp: parse_timestamp(&row.timestamp, row.id),
        })
        .collect();

    Ok(Json(entries))
}

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use serene_core::classify;
use serene_types::api::{JournalRequest, JournalResponse};
use serene_types::models::JournalEntry;

use crate::{AppState, EntryQuery, blocking, parse_timestamp, warning};

/// POST /journal — store the entry verbatim and return its mood reading.
pub async fn save_entry(
    State(state): State<AppState>,
    Json(req): Json<JournalRequest>,
) -> Result<Response, StatusCode> {
    let reading = match classify(&req.text, state.analyzer.as_ref()) {
        Ok(reading) => reading,
        Err(e) => {
            warn!("Rejected journal submission: {}", e);
            return Ok(warning(e.to_string()));
        }
    };

    let db = state.clone();
    let text = req.text;
    let id = blocking("insert_journal", move || db.db.insert_journal(&text)).await?;
    info!("Journal entry {} saved ({})", id, reading.label);

    Ok((
        StatusCode::CREATED,
        Json(JournalResponse {
            id,
            label: reading.label,
            polarity: reading.polarity,
            message: reading.message.to_string(),
        }),
    )
        .into_response())
}

/// GET /journal — most recent entries, newest first.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<EntryQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let limit = query.clamped();
    let rows = blocking("recent_journal", move || db.db.recent_journal(limit)).await?;

    let entries: Vec<JournalEntry> = rows
        .into_iter()
        .map(|row| JournalEntry {
            timestamp: parse_timestamp(&row.timestamp, row.id),
            id: row.id,
            entry: row.entry,
        })
        .collect();

    Ok(Json(entries))
}

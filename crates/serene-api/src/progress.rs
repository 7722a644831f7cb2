use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use serene_db::Log;
use serene_types::api::ProgressResponse;

use crate::{AppState, blocking};

/// GET /progress — distinct active days per log.
pub async fn progress(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let db = state.clone();
    let progress = blocking("progress", move || {
        Ok(ProgressResponse {
            mood_days: db.db.mood_day_count()?,
            journal_days: db.db.journal_day_count()?,
            mood_dates: db.db.active_days(Log::Mood)?,
            journal_dates: db.db.active_days(Log::Journal)?,
        })
    })
    .await?;

    Ok(Json(progress))
}

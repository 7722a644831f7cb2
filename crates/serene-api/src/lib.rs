pub mod breathing;
pub mod games;
pub mod journal;
pub mod menu;
pub mod mood;
pub mod progress;
pub mod state;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{error, warn};

use serene_types::api::WarningResponse;

pub use state::{AppState, AppStateInner};

/// All views of the dashboard, one route group per page of the app.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(menu::index))
        .route("/health", get(menu::health))
        .route("/tips", get(menu::tips))
        .route("/mood", post(mood::analyze_mood).get(mood::list_moods))
        .route("/journal", post(journal::save_entry).get(journal::list_entries))
        .route("/breathing", get(breathing::current))
        .route("/breathing/next", post(breathing::next))
        .route("/breathing/reset", post(breathing::reset))
        .route("/breathing/start", post(breathing::start))
        .route("/breathing/stop", post(breathing::stop))
        .route("/games/color", get(games::color_state))
        .route("/games/color/guess", post(games::guess_color))
        .route("/games/color/reset", post(games::reset_color))
        .route("/games/memory", get(games::memory_state))
        .route("/games/memory/cells/{index}", post(games::click_cell))
        .route("/games/memory/reset", post(games::reset_memory))
        .route("/progress", get(progress::progress))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct EntryQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    20
}

/// Upper bound for list endpoints.
const MAX_LIMIT: u32 = 200;

impl EntryQuery {
    pub fn clamped(&self) -> u32 {
        self.limit.min(MAX_LIMIT)
    }
}

/// 400 with a user-visible message.
pub(crate) fn warning(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(WarningResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

/// Run a blocking store call off the async runtime, mapping failures to 500.
pub(crate) async fn blocking<F, T>(what: &'static str, f: F) -> Result<T, StatusCode>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("DB {} error: {}", what, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// Parse a stored timestamp. SQLite writes "YYYY-MM-DD HH:MM:SS" in UTC.
pub(crate) fn parse_timestamp(raw: &str, id: i64) -> chrono::DateTime<chrono::Utc> {
    raw.parse::<chrono::DateTime<chrono::Utc>>()
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt timestamp '{}' on entry {}: {}", raw, id, e);
            chrono::DateTime::default()
        })
}

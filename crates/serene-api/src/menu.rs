use axum::{Json, response::IntoResponse};

use serene_core::tips::TIPS;
use serene_types::api::{MenuItem, MenuResponse, TipsResponse};

const VIEWS: &[(&str, &str)] = &[
    ("Mood Check", "/mood"),
    ("Journal", "/journal"),
    ("Breathing", "/breathing"),
    ("Tips", "/tips"),
    ("Color Game", "/games/color"),
    ("Memory Game", "/games/memory"),
    ("Progress", "/progress"),
];

/// GET / — main menu.
pub async fn index() -> impl IntoResponse {
    Json(MenuResponse {
        views: VIEWS
            .iter()
            .map(|(name, path)| MenuItem {
                name: name.to_string(),
                path: path.to_string(),
            })
            .collect(),
    })
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn tips() -> impl IntoResponse {
    Json(TipsResponse {
        tips: TIPS.iter().map(|t| t.to_string()).collect(),
    })
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use serene_core::color::COLORS;
use serene_core::{Color, ColorGame, MemoryBoard};
use serene_types::api::{
    ColorGameResponse, ColorGuessRequest, ColorGuessResponse, MemoryBoardResponse,
    MemoryClickResponse,
};

use crate::{AppState, warning};

// -- Color game --

fn color_view(game: &ColorGame) -> ColorGameResponse {
    ColorGameResponse {
        prompt: game.prompt(),
        target: game.target().to_string(),
        colors: COLORS.iter().map(|c| c.to_string()).collect(),
        result: game.result().map(str::to_string),
    }
}

pub async fn color_state(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let session = state.session()?;
    Ok(Json(color_view(session.color())))
}

/// POST /games/color/guess — a wrong guess keeps the same target.
pub async fn guess_color(
    State(state): State<AppState>,
    Json(req): Json<ColorGuessRequest>,
) -> Result<Response, StatusCode> {
    let color: Color = match req.color.parse() {
        Ok(color) => color,
        Err(e) => {
            warn!("Rejected color guess: {}", e);
            return Ok(warning(e.to_string()));
        }
    };

    let mut session = state.session()?;
    let correct = session.guess_color(color);
    let game = session.color();

    Ok(Json(ColorGuessResponse {
        correct,
        result: game.result().unwrap_or_default().to_string(),
        game: color_view(game),
    })
    .into_response())
}

pub async fn reset_color(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let mut session = state.session()?;
    session.reset_color();
    Ok(Json(color_view(session.color())))
}

// -- Memory game --

fn memory_view(board: &MemoryBoard) -> MemoryBoardResponse {
    MemoryBoardResponse {
        cells: board.visible_cells(),
        matched: board.matched_flags().to_vec(),
        pairs_found: board.pairs_found(),
        moves: board.moves(),
        won: board.is_won(),
        message: board.message().map(str::to_string),
    }
}

pub async fn memory_state(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let session = state.session()?;
    Ok(Json(memory_view(session.memory())))
}

/// POST /games/memory/cells/{index}
pub async fn click_cell(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Response, StatusCode> {
    let mut session = state.session()?;
    let outcome = match session.click_memory(index) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Rejected memory click: {}", e);
            return Ok(warning(e.to_string()));
        }
    };

    Ok(Json(MemoryClickResponse {
        outcome: outcome.as_str().to_string(),
        board: memory_view(session.memory()),
    })
    .into_response())
}

pub async fn reset_memory(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let mut session = state.session()?;
    session.reset_memory();
    Ok(Json(memory_view(session.memory())))
}

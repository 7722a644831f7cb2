use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use serene_types::api::BreathingResponse;

use crate::AppState;

fn snapshot(state: &AppState) -> Result<BreathingResponse, StatusCode> {
    let auto_advancing = state.breathing_active();
    let session = state.session()?;
    let stepper = session.breathing();
    Ok(BreathingResponse {
        index: stepper.index(),
        step: stepper.current().to_string(),
        auto_advancing,
    })
}

pub async fn current(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    Ok(Json(snapshot(&state)?))
}

pub async fn next(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    state.session()?.breathing_mut().next();
    Ok(Json(snapshot(&state)?))
}

pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    state.session()?.breathing_mut().reset();
    Ok(Json(snapshot(&state)?))
}

/// POST /breathing/start — advance automatically until stopped.
pub async fn start(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    state.start_breathing_timer()?;
    Ok(Json(snapshot(&state)?))
}

/// POST /breathing/stop — leaving the view cancels the timer.
pub async fn stop(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    state.stop_breathing_timer();
    Ok(Json(snapshot(&state)?))
}

//! Integration tests: drive the full router against an in-memory store.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use serene_api::{AppState, AppStateInner, router};
use serene_core::{LexiconAnalyzer, Session};
use serene_db::Database;
use serene_types::models::MoodLabel;

const SEED: u64 = 1234;

fn setup() -> (AppState, Router) {
    setup_with_interval(Duration::from_secs(2))
}

fn setup_with_interval(interval: Duration) -> (AppState, Router) {
    let state = AppStateInner::new(
        Database::open_in_memory().unwrap(),
        Box::new(LexiconAnalyzer::new()),
        Session::new(Some(SEED)),
        interval,
    );
    (state.clone(), router(state))
}

fn at(timestamp: &str) -> chrono::NaiveDateTime {
    chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").unwrap()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send(app, Method::POST, uri, body).await
}

// -- Menu --

#[tokio::test]
async fn menu_lists_every_view() {
    let (_, app) = setup();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);

    let paths: Vec<&str> = body["views"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["path"].as_str().unwrap())
        .collect();
    for path in ["/mood", "/journal", "/breathing", "/tips", "/games/color", "/games/memory", "/progress"] {
        assert!(paths.contains(&path), "missing {}", path);
    }

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn tips_are_served() {
    let (_, app) = setup();
    let (status, body) = get(&app, "/tips").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["tips"].as_array().unwrap().is_empty());
}

// -- Mood & journal --

#[tokio::test]
async fn positive_mood_is_logged() {
    let (_, app) = setup();
    let (status, body) = post(&app, "/mood", Some(json!({ "text": "I love this, it's wonderful!" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["label"], "positive");
    assert_eq!(body["message"], "You seem positive today! Keep it up! 😊");
    assert!(body["polarity"].as_f64().unwrap() > 0.2);

    let (_, entries) = get(&app, "/mood").await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["mood"], "positive");
}

#[tokio::test]
async fn negative_and_neutral_moods() {
    let (_, app) = setup();
    let (_, body) = post(&app, "/mood", Some(json!({ "text": "I feel sad and tired" }))).await;
    assert_eq!(body["label"], "negative");
    assert_eq!(body["message"], "You're feeling low. It's okay ❤️ Take it slow today.");

    let (_, body) = post(&app, "/mood", Some(json!({ "text": "I went to the store" }))).await;
    assert_eq!(body["label"], "neutral");
    assert_eq!(body["message"], "Your mood seems neutral. Stay mindful 😊");
}

#[tokio::test]
async fn blank_mood_is_rejected_without_write() {
    let (state, app) = setup();
    for text in ["", "   \n"] {
        let (status, body) = post(&app, "/mood", Some(json!({ "text": text }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please write something.");
        assert!(body.get("label").is_none());
    }

    assert!(state.db.recent_moods(10).unwrap().is_empty());
    assert_eq!(state.db.mood_day_count().unwrap(), 0);
}

#[tokio::test]
async fn journal_entry_is_saved_verbatim() {
    let (state, app) = setup();
    let text = "Had a great walk with an old friend.";
    let (status, body) = post(&app, "/journal", Some(json!({ "text": text }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["label"], "positive");

    let (_, entries) = get(&app, "/journal?limit=5").await;
    assert_eq!(entries[0]["entry"], text);
    assert_eq!(state.db.journal_day_count().unwrap(), 1);
}

#[tokio::test]
async fn blank_journal_is_rejected_without_write() {
    let (state, app) = setup();
    let (status, body) = post(&app, "/journal", Some(json!({ "text": "\t" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please write something.");
    assert!(state.db.recent_journal(10).unwrap().is_empty());
}

// -- Progress --

#[tokio::test]
async fn progress_counts_distinct_days() {
    let (state, app) = setup();
    let (_, body) = get(&app, "/progress").await;
    assert_eq!(body["mood_days"], 0);
    assert_eq!(body["journal_days"], 0);

    state.db.insert_mood_at(MoodLabel::Positive, at("2026-03-01 08:00:00")).unwrap();
    state.db.insert_mood_at(MoodLabel::Negative, at("2026-03-01 22:45:00")).unwrap();
    let (_, body) = get(&app, "/progress").await;
    assert_eq!(body["mood_days"], 1);

    state.db.insert_mood_at(MoodLabel::Neutral, at("2026-03-02 07:30:00")).unwrap();
    let (_, body) = get(&app, "/progress").await;
    assert_eq!(body["mood_days"], 2);
    assert_eq!(body["mood_dates"], json!(["2026-03-02", "2026-03-01"]));
    assert_eq!(body["journal_days"], 0);
}

#[tokio::test]
async fn logged_mood_shows_up_in_progress() {
    let (_, app) = setup();
    post(&app, "/mood", Some(json!({ "text": "good" }))).await;
    let (_, body) = get(&app, "/progress").await;
    assert_eq!(body["mood_days"], 1);
    assert_eq!(body["mood_dates"].as_array().unwrap().len(), 1);
}

// -- Breathing --

#[tokio::test]
async fn breathing_next_and_reset() {
    let (_, app) = setup();
    let (_, body) = get(&app, "/breathing").await;
    assert_eq!(body["index"], 0);
    assert_eq!(body["step"], "Inhale... 🌬️");

    for expected in [1, 2, 3, 0] {
        let (_, body) = post(&app, "/breathing/next", None).await;
        assert_eq!(body["index"], expected);
    }

    post(&app, "/breathing/next", None).await;
    let (_, body) = post(&app, "/breathing/reset", None).await;
    assert_eq!(body["index"], 0);
    assert_eq!(body["auto_advancing"], false);
}

#[tokio::test(start_paused = true)]
async fn breathing_timer_advances_until_stopped() {
    let (state, app) = setup_with_interval(Duration::from_secs(2));
    let (_, body) = post(&app, "/breathing/start", None).await;
    assert_eq!(body["auto_advancing"], true);

    tokio::time::sleep(Duration::from_secs(5)).await;
    let (_, body) = get(&app, "/breathing").await;
    assert_eq!(body["index"], 2);

    let (_, body) = post(&app, "/breathing/stop", None).await;
    assert_eq!(body["auto_advancing"], false);

    tokio::time::sleep(Duration::from_secs(10)).await;
    let (_, body) = get(&app, "/breathing").await;
    assert_eq!(body["index"], 2);
    assert!(!state.stop_breathing_timer());
}

#[tokio::test(start_paused = true)]
async fn restarting_breathing_timer_replaces_previous_one() {
    let (state, app) = setup_with_interval(Duration::from_secs(2));
    for _ in 0..3 {
        let (_, body) = post(&app, "/breathing/start", None).await;
        assert_eq!(body["auto_advancing"], true);
    }

    // One live timer: ticks at 2s and 4s only
    tokio::time::sleep(Duration::from_secs(5)).await;
    let (_, body) = get(&app, "/breathing").await;
    assert_eq!(body["index"], 2);

    assert!(state.stop_breathing_timer());
    assert!(!state.stop_breathing_timer());
}

// -- Color game --

#[tokio::test]
async fn color_guesses() {
    let (state, app) = setup();
    let (_, body) = get(&app, "/games/color").await;
    let target = body["target"].as_str().unwrap().to_string();
    assert_eq!(body["prompt"], format!("Click the button: {}", target));
    assert_eq!(body["colors"].as_array().unwrap().len(), 4);
    assert!(body["result"].is_null());

    let wrong = ["Red", "Green", "Blue", "Yellow"]
        .into_iter()
        .find(|c| *c != target)
        .unwrap();
    let (status, body) = post(&app, "/games/color/guess", Some(json!({ "color": wrong }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], false);
    assert_eq!(body["result"], "❌ Wrong! Try again.");
    assert_eq!(body["game"]["target"], target.as_str());

    let (_, body) = post(&app, "/games/color/guess", Some(json!({ "color": target.to_lowercase() }))).await;
    assert_eq!(body["correct"], true);
    assert_eq!(body["result"], "✔ Correct!");

    let current = state.session.lock().unwrap().color().target().to_string();
    assert_eq!(body["game"]["target"], current.as_str());
}

#[tokio::test]
async fn unknown_color_is_rejected() {
    let (_, app) = setup();
    let (_, before) = get(&app, "/games/color").await;
    let (status, body) = post(&app, "/games/color/guess", Some(json!({ "color": "purple" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("purple"));

    let (_, after) = get(&app, "/games/color").await;
    assert_eq!(before["target"], after["target"]);
    assert!(after["result"].is_null());
}

// -- Memory game --

#[tokio::test]
async fn memory_match_and_mismatch() {
    let (state, app) = setup();
    let values = *state.session.lock().unwrap().memory().values();

    let partner = (1..16).find(|&i| values[i] == values[0]).unwrap();
    let stranger = (1..16).find(|&i| values[i] != values[0]).unwrap();
    let other = (1..16)
        .find(|&i| i != partner && i != stranger && values[i] != values[stranger])
        .unwrap();

    // Mismatch stays visible until the next click
    let (_, body) = post(&app, "/games/memory/cells/0", None).await;
    assert_eq!(body["outcome"], "first_pick");
    let (_, body) = post(&app, &format!("/games/memory/cells/{}", stranger), None).await;
    assert_eq!(body["outcome"], "no_match");
    assert_eq!(body["board"]["message"], "Not a match. Try again.");
    assert_eq!(body["board"]["cells"][0], values[0]);
    assert_eq!(body["board"]["cells"][stranger], values[stranger]);

    let (_, body) = post(&app, &format!("/games/memory/cells/{}", other), None).await;
    assert_eq!(body["outcome"], "first_pick");
    assert!(body["board"]["cells"][0].is_null());
    assert!(body["board"]["cells"][stranger].is_null());

    // Start over and find the real pair
    post(&app, "/games/memory/reset", None).await;
    let values = *state.session.lock().unwrap().memory().values();
    let partner = (1..16).find(|&i| values[i] == values[0]).unwrap();

    post(&app, "/games/memory/cells/0", None).await;
    let (_, body) = post(&app, &format!("/games/memory/cells/{}", partner), None).await;
    assert_eq!(body["outcome"], "match");
    assert_eq!(body["board"]["pairs_found"], 1);
    assert_eq!(body["board"]["matched"][0], true);
    assert_eq!(body["board"]["matched"][partner], true);
}

#[tokio::test]
async fn memory_game_can_be_won() {
    let (state, app) = setup();
    let values = *state.session.lock().unwrap().memory().values();

    let mut last = Value::Null;
    for v in 0..8u8 {
        let cells: Vec<usize> = (0..16).filter(|&i| values[i] == v).collect();
        post(&app, &format!("/games/memory/cells/{}", cells[0]), None).await;
        let (_, body) = post(&app, &format!("/games/memory/cells/{}", cells[1]), None).await;
        last = body;
    }

    assert_eq!(last["outcome"], "won");
    assert_eq!(last["board"]["won"], true);
    assert_eq!(last["board"]["message"], "You found all the pairs! 🎉");

    let (_, body) = post(&app, "/games/memory/reset", None).await;
    assert_eq!(body["won"], false);
    assert_eq!(body["pairs_found"], 0);
}

#[tokio::test]
async fn memory_click_out_of_range() {
    let (_, app) = setup();
    let (status, body) = post(&app, "/games/memory/cells/16", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some());
}

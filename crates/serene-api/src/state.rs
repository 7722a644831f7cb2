use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::http::StatusCode;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use serene_core::{SentimentAnalyzer, Session};
use serene_db::Database;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub analyzer: Box<dyn SentimentAnalyzer>,
    pub session: Mutex<Session>,
    pub breath_interval: Duration,
    breathing_timer: Mutex<Option<CancellationToken>>,
}

impl AppStateInner {
    pub fn new(
        db: Database,
        analyzer: Box<dyn SentimentAnalyzer>,
        session: Session,
        breath_interval: Duration,
    ) -> AppState {
        Arc::new(Self {
            db,
            analyzer,
            session: Mutex::new(session),
            breath_interval,
            breathing_timer: Mutex::new(None),
        })
    }

    /// Lock the session for a handler. Never hold the guard across an await.
    pub fn session(&self) -> Result<MutexGuard<'_, Session>, StatusCode> {
        self.session.lock().map_err(|e| {
            error!("Session lock poisoned: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }

    pub fn breathing_active(&self) -> bool {
        self.breathing_timer
            .lock()
            .map(|timer| timer.as_ref().is_some_and(|t| !t.is_cancelled()))
            .unwrap_or(false)
    }

    /// Start advancing the breathing stepper every `breath_interval`.
    /// A running timer is replaced. Must be called from within the runtime.
    pub fn start_breathing_timer(self: &Arc<Self>) -> Result<(), StatusCode> {
        let token = CancellationToken::new();
        {
            let mut timer = self.breathing_timer.lock().map_err(|e| {
                error!("Breathing timer lock poisoned: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
            if let Some(previous) = timer.replace(token.clone()) {
                previous.cancel();
            }
        }

        tokio::spawn(run_breathing_timer(self.clone(), self.breath_interval, token));
        info!("Breathing auto-advance started ({:?} per step)", self.breath_interval);
        Ok(())
    }

    /// Cancel the auto-advance timer. Returns true if one was running.
    pub fn stop_breathing_timer(&self) -> bool {
        let token = match self.breathing_timer.lock() {
            Ok(mut timer) => timer.take(),
            Err(e) => {
                error!("Breathing timer lock poisoned: {}", e);
                return false;
            }
        };

        match token {
            Some(token) => {
                token.cancel();
                info!("Breathing auto-advance stopped");
                true
            }
            None => false,
        }
    }
}

async fn run_breathing_timer(state: AppState, period: Duration, token: CancellationToken) {
    let start = tokio::time::Instant::now() + period;
    let mut interval = tokio::time::interval_at(start, period);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                match state.session.lock() {
                    Ok(mut session) => {
                        let step = session.breathing_mut().next();
                        debug!("Breathing auto-advance: {}", step);
                    }
                    Err(e) => {
                        error!("Session lock poisoned, stopping breathing timer: {}", e);
                        break;
                    }
                }
            }
        }
    }
}

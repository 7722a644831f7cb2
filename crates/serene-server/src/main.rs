mod config;

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use serene_api::AppStateInner;
use serene_core::{LexiconAnalyzer, Session};
use serene_db::Database;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "serene=debug,serene_api=debug,serene_core=debug,serene_db=info,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // An unusable store is fatal
    let db = match Database::open(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            error!("FATAL: cannot open database at {}: {:#}", config.db_path.display(), e);
            std::process::exit(1);
        }
    };

    let state = AppStateInner::new(
        db,
        Box::new(LexiconAnalyzer::new()),
        Session::new(config.rng_seed),
        config.breath_interval,
    );

    let app = serene_api::router(state.clone())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Serene dashboard listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.stop_breathing_timer();
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}

mod builder;
mod config;
mod dashboard;
mod errors;
mod models;
mod notice;
mod preview;
mod routes;
mod shell;
mod state;
mod suggest;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeCraft API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone());
    {
        let shell = state.shell.lock().await;
        if shell.collection().is_empty() {
            info!("Resume collection starts empty");
        } else {
            info!("Resume collection seeded with {} entries", shell.collection().len());
        }
    }
    info!("Suggestion pick: {:?}", config.suggestion_pick);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! InterRoute Server - route plans, impact and freight quotes over HTTP

use anyhow::Result;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use interroute_server::{api, config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("interroute_server=debug".parse()?))
        .init();

    tracing::info!("Starting InterRoute Server...");

    let config = Config::from_env();
    let state = Arc::new(AppState::from_config(&config)?);
    tracing::info!(
        "Route catalog ready ({} corridors)",
        state.planner().catalog().len()
    );

    let mut app = api::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#![recursion_limit = "256"]

mod config;
mod routes;
mod state;
mod tmdb;

use std::sync::Arc;

use crate::tmdb::MovieSource;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // A missing .env is normal in production.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Movie catalog is non-fatal: the app shell still serves, movie routes answer 503.
    let movies: Option<Arc<dyn MovieSource>> = match tmdb::TmdbClient::from_config(&config.tmdb) {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "movie catalog client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "movie catalog not configured; movie endpoints disabled");
            None
        }
    };

    let state = state::AppState::new(movies);
    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%port, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "cinegrid listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
    }
}

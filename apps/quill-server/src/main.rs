//! # Quill Server
//!
//! Serves the blog website and its JSON API from a single Actix-web server.
//! All requests go through one dispatcher that walks a segment trie; see
//! [`routing`].

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod pages;
mod routing;
mod state;
mod telemetry;


use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().context("Invalid configuration")?;

    tracing::info!("Starting Quill on {}:{}", config.host, config.port);

    let state = web::Data::new(AppState::new(&config).await?);
    let router = web::Data::new(handlers::router());

    for (method, path) in router.routes() {
        tracing::debug!(%method, path = %path, "Route registered");
    }

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .app_data(router.clone())
            .default_service(web::to(routing::dispatch))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}

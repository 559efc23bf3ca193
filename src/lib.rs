//! portfolio-api: JSON backend for a personal portfolio site.
//!
//! Serves projects, code snippets, blog posts and skill scores from a
//! relational store. Snippets are the only resource with a write endpoint.

pub mod api;
pub mod config;
pub mod entities;
pub mod error;
pub mod models;
pub mod queries;
pub mod schema;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use poem::listener::TcpListener;
use poem::middleware::{Cors, Tracing};
use poem::{get, Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

pub use config::Config;
pub use error::{Error, Result};
pub use store::Store;

use api::{Api, AppState};

/// Builds the complete HTTP endpoint around an already connected store.
pub fn app(store: Store) -> impl Endpoint + 'static {
    let state = Arc::new(AppState { store });

    let service =
        OpenApiService::new(Api::new(state), "Portfolio API", env!("CARGO_PKG_VERSION"))
            .server("/api");
    let ui = service.swagger_ui();
    let spec = service.spec_endpoint();

    Route::new()
        .at("/", get(api::index))
        .at("/openapi.json", spec)
        .nest("/api", service)
        .nest("/docs", ui)
        .catch_error(api::payload_error)
        .catch_error(api::content_type_error)
        .with(Cors::new())
        .with(Tracing)
}

/// Connects to the store, creates missing tables and serves until Ctrl+C.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = Store::connect(&config.database.url, config.database.max_connections).await?;
    store.ping().await?;
    store.ensure_schema().await?;

    let addr = config.server.addr();
    tracing::info!(%addr, "starting portfolio api");

    poem::Server::new(TcpListener::bind(addr))
        .run_with_graceful_shutdown(
            app(store),
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown signal received");
            },
            Some(Duration::from_secs(5)),
        )
        .await?;

    tracing::info!("portfolio api shut down");
    Ok(())
}

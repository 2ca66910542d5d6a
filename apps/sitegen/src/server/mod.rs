// Static file server over the rendered site.
// Four fixed page routes plus the contact-form endpoint; everything else
// (stylesheets, detail pages) falls through to a static-file service.

pub mod handlers;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.config.site_root.clone());

    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/about", get(handlers::handle_about))
        .route("/services", get(handlers::handle_services))
        .route("/contact", get(handlers::handle_contact))
        .route("/submit-contact", post(handlers::handle_submit_contact))
        .fallback_service(static_files)
        .with_state(state)
}

/// Binds and serves the rendered site until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let port = config.port;
    let state = AppState { config };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

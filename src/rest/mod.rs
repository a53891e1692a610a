// rest/mod.rs: Public HTTP API for the dashboard.
//
// Axum server exposing the JSON API under /api plus static image
// serving under /images. CORS is wide open: the dashboard UI is served
// from a different origin and the API carries no credentials.
//
// Endpoints:
//   GET  /api/current-interview
//   GET  /api/history
//   GET  /api/history/{id}
//   POST /api/new-analysis
//   POST /api/export-report
//   GET  /api/youtube-skills
//   GET  /api/pricing
//   GET  /api/performance-resources
//   GET  /api/health
//   GET  /images/{file}

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::AppContext;

/// Build the full router. Split from [`serve`] so tests can mount it on
/// any listener.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let images = ServeDir::new(&ctx.config.images_dir);

    Router::new()
        .route(
            "/api/current-interview",
            get(routes::interview::current_interview),
        )
        .route("/api/history", get(routes::history::list_history))
        .route("/api/history/{id}", get(routes::history::history_detail))
        .route("/api/new-analysis", post(routes::interview::new_analysis))
        .route("/api/export-report", post(routes::export::export_report))
        .route("/api/youtube-skills", get(routes::resources::youtube_skills))
        .route("/api/pricing", get(routes::resources::pricing))
        .route(
            "/api/performance-resources",
            get(routes::resources::performance_resources),
        )
        .route("/api/health", get(routes::health::health))
        .nest_service("/images", images)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

pub async fn serve(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("dashboard API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Path, Query, State},
    response::{Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{GenerationCache, PreviewService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub preview: Arc<PreviewService>,
    pub cache: Arc<GenerationCache>,
}

/// Create application state from a loaded configuration.
///
/// Fails when the configured catalog file cannot be read or is invalid.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let catalog = Arc::new(config.load_catalog()?);
    let preview = Arc::new(PreviewService::new(catalog, config.limits));
    let cache = Arc::new(GenerationCache::new(config.share_ttl_secs));

    Ok(AppState {
        config: Arc::new(config),
        preview,
        cache,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/palette-types", get(api::handle_palette_types))
        .route("/api/color", get(handle_color))
        .route("/api/palette", get(handle_palette))
        .route("/api/share/:id", get(handle_share))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_color(
    State(state): State<AppState>,
    query: Query<api::color::ColorQuery>,
) -> Result<Json<api::ColorPreviewResponse>, ApiError> {
    api::handle_color(State(state.preview), State(state.cache), query).await
}

async fn handle_palette(
    State(state): State<AppState>,
    query: Query<api::palette::PaletteQuery>,
) -> Result<Json<api::PaletteResponse>, ApiError> {
    api::handle_palette(State(state.preview), State(state.cache), query).await
}

async fn handle_share(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Response, ApiError> {
    api::handle_share(State(state.cache), path).await
}

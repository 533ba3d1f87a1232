use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::GenerationCache;

/// Path under which a stored preview can be fetched
pub fn share_url(id: &str) -> String {
    format!("/api/share/{id}")
}

/// Fetch a rendered preview by share id
///
/// Each preview can be fetched exactly once; later requests, unknown ids and
/// expired entries all return 404.
#[utoipa::path(
    get,
    path = "/api/share/{id}",
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 404, description = "Unknown, expired or already shared"),
    ),
    params(
        ("id" = String, Path, description = "Share id returned by /api/color or /api/palette"),
    ),
    tag = "Preview"
)]
pub async fn handle_share(
    State(cache): State<Arc<GenerationCache>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(generation) = cache.take_once(&id).await else {
        tracing::info!(share_id = %id, "Share id not found");
        return Err(ApiError::NotFound);
    };

    tracing::info!(
        share_id = %id,
        color = %generation.color,
        name = %generation.color_name,
        size_bytes = generation.image.len(),
        "Sharing preview"
    );

    let disposition = format!("inline; filename=\"{}\"", generation.kind.file_name());
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_LENGTH, generation.image.len().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(generation.image),
    )
        .into_response())
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chroma_core::{ColorError, PaletteError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown palette type: {0}")]
    UnknownPaletteType(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Not found")]
    NotFound,

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

impl From<ColorError> for ApiError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::InvalidColorFormat(token) => ApiError::InvalidColor(token),
        }
    }
}

impl From<PaletteError> for ApiError {
    fn from(e: PaletteError) -> Self {
        match e {
            PaletteError::UnknownPaletteType(id) => ApiError::UnknownPaletteType(id),
        }
    }
}

impl From<crate::services::PreviewError> for ApiError {
    fn from(e: crate::services::PreviewError) -> Self {
        use crate::services::PreviewError;
        match e {
            PreviewError::Color(e) => e.into(),
            PreviewError::Palette(e) => e.into(),
            e @ PreviewError::OutOfRange { .. } => ApiError::InvalidParameter(e.to_string()),
            PreviewError::Render(e) => ApiError::Render(e),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Render task failed: {0}")]
    Task(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColor(_)
            | ApiError::UnknownPaletteType(_)
            | ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_invalid_color() {
        let error = ApiError::InvalidColor("GGGGGG".to_string());
        assert_eq!(error.to_string(), "Invalid color: GGGGGG");
    }

    #[test]
    fn test_api_error_unknown_palette_type() {
        let error = ApiError::UnknownPaletteType("pentadic".to_string());
        assert_eq!(error.to_string(), "Unknown palette type: pentadic");
    }

    #[test]
    fn test_api_error_not_found() {
        let error = ApiError::NotFound;
        assert_eq!(error.to_string(), "Not found");
    }

    #[test]
    fn test_render_error_pixmap_allocation() {
        let error = RenderError::PixmapAllocation;
        assert_eq!(error.to_string(), "Failed to allocate pixmap");
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_api_error_from_color_error() {
        let api_error: ApiError = ColorError::InvalidColorFormat("nope".to_string()).into();
        match api_error {
            ApiError::InvalidColor(token) => assert_eq!(token, "nope"),
            _ => panic!("Expected InvalidColor variant"),
        }
    }

    #[test]
    fn test_api_error_from_preview_error() {
        use crate::services::PreviewError;

        let api_error: ApiError = PreviewError::OutOfRange {
            name: "range",
            value: 11,
            min: 0,
            max: 10,
        }
        .into();
        assert_eq!(
            api_error.to_string(),
            "Invalid parameter: range must be between 0 and 10, got 11"
        );

        let api_error: ApiError =
            PreviewError::Palette(PaletteError::UnknownPaletteType("x".to_string())).into();
        assert!(matches!(api_error, ApiError::UnknownPaletteType(_)));
    }

    #[test]
    fn test_api_error_from_render_error() {
        let api_error: ApiError = RenderError::PixmapAllocation.into();
        match api_error {
            ApiError::Render(_) => {}
            _ => panic!("Expected Render variant"),
        }
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::InvalidColor("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::UnknownPaletteType("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidParameter("range".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Render(RenderError::PixmapAllocation).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a valid PNG image
pub fn assert_png(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_png(),
        "Expected PNG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..8.min(response.body.len())]
    );

    // Check Content-Type header
    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("image/png"),
        "Expected Content-Type: image/png"
    );
}

/// Assert an error response with the JSON `{status, error}` body
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}. Full response: {}",
        expected.as_u16(),
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert a swatch object carries a name, a `#RRGGBB` hex and matching rgb
pub fn assert_valid_swatch(swatch: &serde_json::Value) {
    assert!(swatch["name"].is_string(), "Expected swatch name: {swatch}");

    let hex = swatch["hex"].as_str().expect("Expected hex string");
    assert_eq!(hex.len(), 7, "Expected #RRGGBB, got {hex}");
    assert!(hex.starts_with('#'));

    let rgb: Vec<u64> = swatch["rgb"]
        .as_array()
        .expect("Expected rgb array")
        .iter()
        .map(|c| c.as_u64().unwrap())
        .collect();
    let value = u64::from_str_radix(&hex[1..], 16).unwrap();
    assert_eq!(rgb, vec![value >> 16, (value >> 8) & 0xFF, value & 0xFF]);
}

/// Decode PNG bytes, returning `(width, height)`
pub fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let reader = decoder.read_info().expect("Failed to decode PNG");
    let info = reader.info();
    (info.width, info.height)
}

/// Share id from a preview response, checking its format
pub fn share_id(json: &serde_json::Value) -> String {
    let id = json["share_id"].as_str().expect("Expected share_id");
    assert_eq!(id.len(), 32, "share id should be 32 hex chars");
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(json["image_url"], format!("/api/share/{id}"));
    id.to_string()
}

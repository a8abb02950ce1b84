//! Shared HTTP response helpers.
//!
//! Centralizes status checks (non-success → [`GatewayError::Request`]) and
//! content-type handling (non-JSON success → absent) so the endpoint methods
//! stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise the body text becomes
/// the error message, falling back to `HTTP {status}` when the body is empty.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        body
    };
    tracing::warn!(status = status.as_u16(), %message, "data store request failed");
    Err(GatewayError::Request {
        status: status.as_u16(),
        message,
    })
}

/// Decode a successful response, mapping non-JSON bodies to `None`.
///
/// Delete and purge endpoints may answer with an empty or plain-text body.
pub async fn decode_optional<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<Option<T>, GatewayError> {
    if !is_json(&resp) {
        return Ok(None);
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| GatewayError::Parse(e.to_string()))
}

fn is_json(resp: &reqwest::Response) -> bool {
    resp.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

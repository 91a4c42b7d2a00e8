// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// JSON keys whose values are masked before a request body is logged.
const REDACTED_KEYS: [&str; 2] = ["password", "confirm_password"];

/// Middleware to log request and response bodies in debug mode.
/// Credential fields are masked; plaintext passwords must never hit the log.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if !bytes.is_empty() {
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            if let Ok(mut json) = serde_json::from_str::<serde_json::Value>(body_str) {
                redact_sensitive(&mut json);
                debug!(
                    method = %parts.method,
                    uri = %parts.uri,
                    request_body = %json,
                    "📥 Request"
                );
            } else {
                debug!(
                    method = %parts.method,
                    uri = %parts.uri,
                    "📥 Request with non-JSON body"
                );
            }
        }
    }

    // Reconstruct request
    let request = Request::from_parts(parts, Body::from(bytes));

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if !bytes.is_empty() {
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            debug!(
                status = %parts.status,
                response_body = %body_str,
                "📤 Response"
            );
        }
    }

    // Reconstruct response
    let response = Response::from_parts(parts, Body::from(bytes));

    Ok(response)
}

fn redact_sensitive(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for key in REDACTED_KEYS {
                if let Some(entry) = map.get_mut(key) {
                    *entry = serde_json::Value::String("***".to_string());
                }
            }
            for (_, nested) in map.iter_mut() {
                redact_sensitive(nested);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items.iter_mut() {
                redact_sensitive(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_credential_fields_at_any_depth() {
        let mut value = serde_json::json!({
            "email": "ada@example.com",
            "password": "hunter2!",
            "nested": { "confirm_password": "hunter2!" }
        });

        redact_sensitive(&mut value);

        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["password"], "***");
        assert_eq!(value["nested"]["confirm_password"], "***");
    }
}

//! HTTP client construction, auth headers and status mapping.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::PalaverError;

/// Build the HTTP client shared by every provider call.
///
/// No request timeout is set: a call runs until the server answers or the
/// connection fails.
pub fn build_client() -> Result<reqwest::Client, PalaverError> {
    reqwest::Client::builder()
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| PalaverError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Map a non-success HTTP status and body to an error.
pub fn status_to_error(status: u16, body: &str) -> PalaverError {
    let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
    match status {
        401 | 403 => PalaverError::Authentication(message),
        429 => PalaverError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => PalaverError::api(status, message),
    }
}

// OpenAI-style envelope: {"error": {"message": "..."}}
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

fn extract_retry_after(body: &str) -> Option<u64> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("retry_after"))
                .and_then(|r| r.as_f64())
                .map(|s| (s * 1000.0) as u64)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_headers_carry_key() {
        let headers = bearer_headers("sk-test");
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn empty_key_still_sends_bearer_prefix() {
        let headers = bearer_headers("");
        assert_eq!(headers[AUTHORIZATION], "Bearer ");
    }

    #[test]
    fn unauthorized_uses_envelope_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        match status_to_error(401, body) {
            PalaverError::Authentication(msg) => assert_eq!(msg, "Incorrect API key provided"),
            other => panic!("expected Authentication, got {other:?}"),
        }
    }

    #[test]
    fn rate_limit_parses_retry_after_seconds() {
        let body = r#"{"error":{"message":"slow down","retry_after":1.5}}"#;
        match status_to_error(429, body) {
            PalaverError::RateLimited { retry_after_ms } => assert_eq!(retry_after_ms, Some(1500)),
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn plain_body_is_kept_verbatim() {
        match status_to_error(502, "Bad Gateway") {
            PalaverError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}

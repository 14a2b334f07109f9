use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure of a single API round trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response. `message` is the `error` field of the body, if any.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status { status: u16, message: Option<String> },
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// A DOM or fetch API call failed before a request was sent.
    #[error("browser API error: {0}")]
    Browser(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build a status error from a response body, picking up `{"error": "..."}`.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        ApiError::Status { status, message }
    }

    pub fn network(value: JsValue) -> Self {
        ApiError::Network(js_message(&value))
    }

    pub fn browser(value: JsValue) -> Self {
        ApiError::Browser(js_message(&value))
    }

    /// Server-provided error text, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// User-facing text: `"{action}: {reason}"`, network failures called out separately.
    pub fn describe(&self, action: &str) -> String {
        match self {
            ApiError::Network(message) => format!("Ошибка сети: {}", message),
            ApiError::Status { .. } => {
                format!("{}: {}", action, self.server_message().unwrap_or("Неизвестная ошибка"))
            }
            other => format!("{}: {}", action, other),
        }
    }
}

/// Best-effort human-readable text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_reads_error_field() {
        let err = ApiError::from_body(400, r#"{"error":"bad format"}"#);
        assert_eq!(err.server_message(), Some("bad format"));
        assert!(matches!(err, ApiError::Status { status: 400, .. }));
    }

    #[test]
    fn test_from_body_without_error_field() {
        let err = ApiError::from_body(500, "Internal Server Error");
        assert_eq!(err.server_message(), None);

        let err = ApiError::from_body(404, r#"{"error":""}"#);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_display() {
        let err = ApiError::from_body(400, r#"{"error":"invalid id"}"#);
        assert_eq!(err.to_string(), "HTTP 400: invalid id");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "network error: offline");
    }

    #[test]
    fn test_describe() {
        let err = ApiError::from_body(400, r#"{"error":"invalid payload"}"#);
        assert_eq!(err.describe("Ошибка при добавлении"), "Ошибка при добавлении: invalid payload");

        let err = ApiError::from_body(500, "");
        assert_eq!(err.describe("Ошибка"), "Ошибка: Неизвестная ошибка");

        let err = ApiError::Network("Failed to fetch".into());
        assert!(err.is_network());
        assert_eq!(err.describe("Ошибка"), "Ошибка сети: Failed to fetch");
    }
}

//! HTTP Client
//!
//! Thin wrapper over `window.fetch` for JSON, multipart and binary
//! round trips. Non-2xx responses become [`ApiError::Status`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Request, RequestInit, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// A successful response that is either JSON text or raw bytes.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(String),
    Bytes(Blob),
}

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ApiConfig,
}

enum Body<'a> {
    Empty,
    Json(String),
    Form(&'a FormData),
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send("GET", path, Body::Empty).await?;
        decode(&read_text(&response).await?)
    }

    /// Send a JSON body with the given method and decode the JSON reply.
    pub async fn send_json<B, T>(&self, method: &str, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let json = serde_json::to_string(body)?;
        let response = self.send(method, path, Body::Json(json)).await?;
        decode(&read_text(&response).await?)
    }

    /// Like [`send_json`](Self::send_json) but ignores the reply body.
    pub async fn send_json_unit<B: Serialize>(&self, method: &str, path: &str, body: &B) -> Result<(), ApiError> {
        let json = serde_json::to_string(body)?;
        self.send(method, path, Body::Json(json)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send("DELETE", path, Body::Empty).await?;
        Ok(())
    }

    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: &FormData) -> Result<T, ApiError> {
        let response = self.send("POST", path, Body::Form(form)).await?;
        decode(&read_text(&response).await?)
    }

    pub async fn get_blob(&self, path: &str) -> Result<Blob, ApiError> {
        let response = self.send("GET", path, Body::Empty).await?;
        read_blob(&response).await
    }

    /// GET that may answer with either JSON or bytes; told apart by `Content-Type`.
    pub async fn get_payload(&self, path: &str) -> Result<Payload, ApiError> {
        let response = self.send("GET", path, Body::Empty).await?;
        let content_type = response
            .headers()
            .get("content-type")
            .map_err(ApiError::browser)?
            .unwrap_or_default();
        if is_json(&content_type) {
            Ok(Payload::Json(read_text(&response).await?))
        } else {
            Ok(Payload::Bytes(read_blob(&response).await?))
        }
    }

    async fn send(&self, method: &str, path: &str, body: Body<'_>) -> Result<Response, ApiError> {
        let init = RequestInit::new();
        init.set_method(method);
        let json_body = matches!(body, Body::Json(_));
        match body {
            Body::Empty => {}
            Body::Json(json) => init.set_body(&JsValue::from_str(&json)),
            Body::Form(form) => init.set_body(form.as_ref()),
        }

        let url = self.url(path);
        let request = Request::new_with_str_and_init(&url, &init).map_err(ApiError::browser)?;
        if json_body {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(ApiError::browser)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Browser("window is not available".into()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ApiError::network)?;
        let response: Response = value.dyn_into().map_err(ApiError::browser)?;

        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        // Error bodies are best effort; an unreadable one still yields the status
        let text = read_text(&response).await.unwrap_or_default();
        web_sys::console::error_1(&format!("[API] {} {} -> {}", method, url, status).into());
        Err(ApiError::from_body(status, &text))
    }
}

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Empty bodies decode as JSON `null` so unit-like replies succeed.
fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    Ok(serde_json::from_str(text)?)
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(ApiError::browser)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::network)?;
    Ok(value.as_string().unwrap_or_default())
}

async fn read_blob(response: &Response) -> Result<Blob, ApiError> {
    let promise = response.blob().map_err(ApiError::browser)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::network)?;
    value.dyn_into::<Blob>().map_err(ApiError::browser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Created {
        id: u32,
    }

    #[test]
    fn test_is_json() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(!is_json("image/png"));
        assert!(!is_json(""));
    }

    #[test]
    fn test_decode_body() {
        let created: Created = decode(r#"{"id":7}"#).unwrap();
        assert_eq!(created, Created { id: 7 });
    }

    #[test]
    fn test_decode_empty_body_as_null() {
        let unit: Option<Created> = decode("").unwrap();
        assert_eq!(unit, None);
        assert!(matches!(decode::<Created>("not json"), Err(ApiError::Decode(_))));
    }
}

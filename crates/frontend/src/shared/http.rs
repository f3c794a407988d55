//! Thin JSON/multipart request helpers over `gloo_net`.
//!
//! Failures come back as [`ApiError`]. Pages show the backend's own reason
//! when it sent one and an operation-specific fallback otherwise.

use crate::shared::api_utils::api_url;
use contracts::shared::api::backend_reason;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use web_sys::FormData;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response whose body named the reason.
    Backend(String),
    /// Non-2xx response without a readable reason.
    Status(u16),
    /// The request never produced a usable response.
    Transport(String),
}

impl ApiError {
    /// Text for a toast: the backend's reason, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend(reason) => reason.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Backend(reason) => f.write_str(reason),
            ApiError::Status(status) => write!(f, "HTTP {}", status),
            ApiError::Transport(detail) => f.write_str(detail),
        }
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

    read_json(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

    read_json(response).await
}

pub async fn post_form<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let response = send_form(path, form).await?;
    read_json(response).await
}

/// POST a multipart form and return the raw response once its status is OK,
/// leaving the body unread for streaming.
pub async fn send_form(path: &str, form: FormData) -> Result<Response, ApiError> {
    let url = api_url(path);
    log::debug!("[HTTP] POST {}", url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

    ensure_ok(response).await
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(match backend_reason(&body) {
        Some(reason) => ApiError::Backend(reason),
        None => ApiError::Status(status),
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_reason() {
        let rejected = ApiError::Backend("Income sources are required".into());
        assert_eq!(rejected.user_message("Failed to calculate tax"), "Income sources are required");
        assert_eq!(ApiError::Status(502).user_message("Failed to calculate tax"), "Failed to calculate tax");
        assert_eq!(ApiError::Status(502).to_string(), "HTTP 502");
    }
}

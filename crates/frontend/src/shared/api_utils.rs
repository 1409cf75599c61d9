//! API utilities for frontend-backend communication
//!
//! API base resolution, the `ApiError` type and GET helpers for lookup
//! endpoints.

use contracts::shared::api_response::list_from_value;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}

/// Base URL of the backend REST API.
///
/// Taken from `EXIM_API_BASE` at build time when set; otherwise built from
/// the current window location with the backend on port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api"
/// - "/api" if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("EXIM_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "/api".to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000/api", protocol, hostname)
}

/// GET a JSON body without assuming its shape.
pub async fn get_value(url: &str) -> Result<Value, ApiError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET a lookup endpoint and read its rows, whatever envelope it uses.
pub async fn fetch_list<T: DeserializeOwned>(url: &str) -> Result<Vec<T>, ApiError> {
    let body = get_value(url).await?;
    Ok(list_from_value(body))
}

/// `?search=...` query fragment.
pub fn search_query(search: &str) -> String {
    format!("search={}", urlencoding::encode(search))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_is_encoded() {
        assert_eq!(search_query("C&F PORT"), "search=C%26F%20PORT");
        assert_eq!(search_query(""), "search=");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(502).to_string(), "HTTP 502");
        assert_eq!(
            ApiError::Decode("expected list".into()).to_string(),
            "unexpected response: expected list"
        );
    }
}

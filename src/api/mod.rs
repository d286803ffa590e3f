//! Inventory REST API
//!
//! Backend seam for the item collection endpoint, organized as the
//! `ItemApi` trait plus the browser `fetch` implementation.

mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Item, ItemDraft, ItemId};

pub use http::HttpItemApi;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures talking to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (network down, CORS, bad URL)
    #[error("transport error: {0}")]
    Transport(String),
    /// Backend answered with a non-2xx status
    #[error("server returned status {status}")]
    Status { status: u16, message: Option<String> },
    /// Request body could not be serialized
    #[error("could not encode request: {0}")]
    Encode(String),
    /// 2xx response whose body did not match the item contract
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short human-readable reason, ignoring any backend-supplied text
    pub fn reason(&self) -> String {
        match self {
            ApiError::Transport(message) => message.clone(),
            ApiError::Status { status, .. } => format!("server responded with status {}", status),
            ApiError::Encode(_) => "could not prepare request".to_string(),
            ApiError::Decode(_) => "unexpected response from server".to_string(),
        }
    }

    /// Backend `{"error": ...}` text when present, else `reason()`
    pub fn detail(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            other => other.reason(),
        }
    }
}

/// Error body returned by the backend on failed writes
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the status of a response, extracting the backend error text on failure
pub fn check_status(status: u16, body: &str) -> ApiResult<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty());
    Err(ApiError::Status { status, message })
}

/// Check the status, then decode a JSON body
pub fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Item collection operations
#[async_trait(?Send)]
pub trait ItemApi {
    /// GET the full collection
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// GET a single item
    async fn get_item(&self, id: &ItemId) -> ApiResult<Item>;

    /// POST a new item
    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<()>;

    /// PUT the full item
    async fn update_item(&self, id: &ItemId, draft: &ItemDraft) -> ApiResult<()>;

    /// DELETE an item
    async fn delete_item(&self, id: &ItemId) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_extracts_backend_error() {
        let err = check_status(400, r#"{"error":"Name already exists"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 400, message: Some("Name already exists".to_string()) }
        );
        assert_eq!(err.detail(), "Name already exists");
    }

    #[test]
    fn test_check_status_without_error_body() {
        let err = check_status(500, "<html>oops</html>").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, message: None });
        assert_eq!(err.detail(), "server responded with status 500");

        let blank = check_status(422, r#"{"error":"  "}"#).unwrap_err();
        assert_eq!(blank, ApiError::Status { status: 422, message: None });
    }

    #[test]
    fn test_check_status_accepts_any_2xx() {
        assert!(check_status(200, "").is_ok());
        assert!(check_status(201, "not json").is_ok());
        assert!(check_status(204, "").is_ok());
        assert!(check_status(304, "").is_err());
    }

    #[test]
    fn test_decode_json_list() {
        let items: Vec<Item> = decode_json(
            200,
            r#"[{"id":1,"name":"Pen","category":"Stationery","quantity":3,"price":1000}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Pen");

        let empty: Vec<Item> = decode_json(200, "[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_decode_json_bad_body() {
        let err = decode_json::<Vec<Item>>(200, r#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.detail(), "unexpected response from server");
    }

    #[test]
    fn test_reason_ignores_backend_text() {
        let err = ApiError::Status { status: 404, message: Some("gone".to_string()) };
        assert_eq!(err.reason(), "server responded with status 404");
        assert_eq!(ApiError::Transport("Failed to fetch".to_string()).detail(), "Failed to fetch");
        assert_eq!(
            ApiError::Encode("key must be a string".to_string()).detail(),
            "could not prepare request"
        );
    }
}

//! Browser fetch implementation of `ItemApi`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{check_status, decode_json, ApiError, ApiResult, ItemApi};
use crate::models::{Item, ItemDraft, ItemId};

/// Item API over `window.fetch`, rooted at an injected base URL
#[derive(Debug, Clone)]
pub struct HttpItemApi {
    base: String,
}

impl HttpItemApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_string() }
    }

    pub fn collection_url(&self) -> String {
        self.base.clone()
    }

    pub fn item_url(&self, id: &ItemId) -> String {
        format!("{}/{}", self.base, id.path_segment())
    }

    /// Issue one request and return the status with the raw body text
    async fn send(&self, method: &str, url: &str, body: Option<String>) -> ApiResult<(u16, String)> {
        log::debug!("{} {}", method, url);

        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = &body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &init).map_err(transport)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(transport)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let response: Response = response.dyn_into().map_err(transport)?;

        let text = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        Ok((response.status(), text.as_string().unwrap_or_default()))
    }

    async fn send_json(&self, method: &str, url: &str, draft: &ItemDraft) -> ApiResult<()> {
        let body = encode_body(draft)?;
        let (status, text) = self.send(method, url, Some(body)).await?;
        check_status(status, &text)
    }
}

fn encode_body(draft: &ItemDraft) -> ApiResult<String> {
    serde_json::to_string(draft).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Convert a thrown JS value into a transport error
fn transport(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Transport(message)
}

#[async_trait(?Send)]
impl ItemApi for HttpItemApi {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let (status, text) = self.send("GET", &self.collection_url(), None).await?;
        decode_json(status, &text)
    }

    async fn get_item(&self, id: &ItemId) -> ApiResult<Item> {
        let (status, text) = self.send("GET", &self.item_url(id), None).await?;
        decode_json(status, &text)
    }

    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<()> {
        self.send_json("POST", &self.collection_url(), draft).await
    }

    async fn update_item(&self, id: &ItemId, draft: &ItemDraft) -> ApiResult<()> {
        self.send_json("PUT", &self.item_url(id), draft).await
    }

    async fn delete_item(&self, id: &ItemId) -> ApiResult<()> {
        let (status, text) = self.send("DELETE", &self.item_url(id), None).await?;
        check_status(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_base() {
        let api = HttpItemApi::new("/api/items/");
        assert_eq!(api.collection_url(), "/api/items");
        assert_eq!(api.item_url(&ItemId::new("17")), "/api/items/17");
    }

    #[test]
    fn test_encode_body_is_plain_json() {
        let draft = ItemDraft {
            name: "Pen".to_string(),
            category: crate::models::Category::Stationery,
            quantity: 3,
            price: 1000,
            description: None,
        };
        assert_eq!(
            encode_body(&draft).unwrap(),
            r#"{"name":"Pen","category":"Stationery","quantity":3,"price":1000}"#
        );
    }

    #[test]
    fn test_item_url_escapes_id() {
        let api = HttpItemApi::new("http://localhost:5000/api/items");
        assert_eq!(
            api.item_url(&ItemId::new("a b/c")),
            "http://localhost:5000/api/items/a%20b%2Fc"
        );
    }
}

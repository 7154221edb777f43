//! Items API
//!
//! Abstract interface to the `/items` REST resource plus the reqwest-backed
//! implementation used in the browser.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};

use crate::domain::{Item, ItemId, ItemPayload};
use crate::error::{ApiError, ApiResult};

/// CRUD operations on the remote item list
///
/// Futures are not `Send`: in wasm32 they are driven by the browser event loop.
#[async_trait(?Send)]
pub trait ItemsApi {
    /// `GET /items`
    async fn list(&self) -> ApiResult<Vec<Item>>;

    /// `POST /items`
    async fn create(&self, payload: &ItemPayload) -> ApiResult<()>;

    /// `PUT /items/{id}`
    async fn update(&self, id: ItemId, payload: &ItemPayload) -> ApiResult<()>;

    /// `DELETE /items/{id}`
    ///
    /// Only a failure to complete the request is an error; the response
    /// status is not inspected.
    async fn delete(&self, id: ItemId) -> ApiResult<()>;
}

/// `ItemsApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    client: Client,
    base_url: String,
}

impl HttpItemsApi {
    /// `base_url` must be absolute, e.g. `http://127.0.0.1:8090/items`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Turn a non-2xx response into `ApiError::Status`
fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::status(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
        ))
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let response = self.client.get(&self.base_url).send().await?;
        let items = check_status(response)?.json::<Vec<Item>>().await?;
        Ok(items)
    }

    async fn create(&self, payload: &ItemPayload) -> ApiResult<()> {
        debug!("POST {}", self.base_url);
        let response = self.client.post(&self.base_url).json(payload).send().await?;
        check_status(response)?;
        Ok(())
    }

    async fn update(&self, id: ItemId, payload: &ItemPayload) -> ApiResult<()> {
        let url = self.item_url(id);
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(payload).send().await?;
        check_status(response)?;
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> ApiResult<()> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);
        self.client.delete(&url).send().await?;
        Ok(())
    }
}

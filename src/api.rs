//! Browser Bindings
//!
//! `fetch` transport and `localStorage` backend plugged into the client core.

use async_trait::async_trait;
use gloo_net::http::Request;
use task_client::{
    ApiClient, ApiError, ApiRequest, ApiResponse, ApiResult, ClientConfig, KeyValueStore, Method, SessionStore,
    TaskBoard, Transport,
};

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let mut builder = builder.header("Accept", "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let built = match request.body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::local() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::error!("[STORAGE] Failed to write {}: {:?}", key, e);
                }
            }
            None => log::error!("[STORAGE] localStorage unavailable"),
        }
    }

    fn remove(&self, key: &str) {
        match Self::local() {
            Some(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    log::error!("[STORAGE] Failed to remove {}: {:?}", key, e);
                }
            }
            None => log::error!("[STORAGE] localStorage unavailable"),
        }
    }
}

pub fn api_client(config: &ClientConfig) -> ApiClient<GlooTransport> {
    ApiClient::new(GlooTransport, config.api_base_url.clone())
}

pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}

pub fn task_board(config: &ClientConfig) -> TaskBoard<GlooTransport, BrowserStorage> {
    TaskBoard::new(api_client(config), session_store())
}

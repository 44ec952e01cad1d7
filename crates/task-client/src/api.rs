//! REST API Client
//!
//! Typed bindings to the backend endpoints over a pluggable transport. The
//! browser build plugs in a `fetch`-based transport; tests plug in a recorder.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{LoginRequest, RegisterRequest, Stats, Task, TaskPayload, TokenPair};

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Outgoing request, fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`
    pub bearer: Option<String>,
    /// JSON body
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request and returns whatever status the server answered with.
/// Only failures to get a response at all are errors here.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> ApiResult<R> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn call(&self, method: Method, path: &str, bearer: Option<&str>, body: Option<String>) -> ApiResult<ApiResponse> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer: bearer.map(str::to_string),
            body,
        };
        log::debug!("[API] {} {}", method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        match response.status {
            200..=299 => Ok(response),
            401 => Err(ApiError::Unauthorized),
            status => Err(ApiError::Status { status, body: response.body }),
        }
    }

    pub async fn register(&self, request: &RegisterRequest<'_>) -> ApiResult<()> {
        self.call(Method::Post, "/api/register/", None, Some(encode(request)?)).await?;
        Ok(())
    }

    pub async fn login(&self, request: &LoginRequest<'_>) -> ApiResult<TokenPair> {
        let response = self.call(Method::Post, "/api/login/", None, Some(encode(request)?)).await?;
        decode(&response)
    }

    pub async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>> {
        let response = self.call(Method::Get, "/api/tasks/", Some(token), None).await?;
        decode(&response)
    }

    pub async fn create_task(&self, token: &str, payload: &TaskPayload) -> ApiResult<Task> {
        let response = self.call(Method::Post, "/api/tasks/", Some(token), Some(encode(payload)?)).await?;
        decode(&response)
    }

    pub async fn update_task(&self, token: &str, id: u32, payload: &TaskPayload) -> ApiResult<Task> {
        let path = format!("/api/tasks/{}/", id);
        let response = self.call(Method::Put, &path, Some(token), Some(encode(payload)?)).await?;
        decode(&response)
    }

    pub async fn delete_task(&self, token: &str, id: u32) -> ApiResult<()> {
        let path = format!("/api/tasks/{}/", id);
        self.call(Method::Delete, &path, Some(token), None).await?;
        Ok(())
    }

    pub async fn mark_completed(&self, token: &str, id: u32) -> ApiResult<Task> {
        let path = format!("/api/tasks/{}/mark_completed/", id);
        let response = self.call(Method::Patch, &path, Some(token), Some("{}".to_string())).await?;
        decode(&response)
    }

    pub async fn task_stats(&self, token: &str) -> ApiResult<Stats> {
        let response = self.call(Method::Get, "/api/task-stats/", Some(token), None).await?;
        decode(&response)
    }
}

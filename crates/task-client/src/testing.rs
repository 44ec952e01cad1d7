//! Test doubles for the transport and the session storage.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::{ApiError, ApiResult};
use crate::session::KeyValueStore;

/// In-memory stand-in for `localStorage`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Records every request and answers from canned responses keyed by
/// method and path. Unmatched requests fail as network errors.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<HashMap<(Method, String), VecDeque<ApiResponse>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response; the last queued one repeats once the queue drains
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(ApiResponse {
                status,
                body: body.to_string(),
            });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url.ends_with(path))
            .count()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        let mut responses = self.responses.borrow_mut();
        let queue = responses
            .iter_mut()
            .find(|((method, path), _)| *method == request.method && request.url.ends_with(path.as_str()))
            .map(|(_, queue)| queue);
        match queue {
            Some(queue) if queue.len() > 1 => Ok(queue.pop_front().expect("queue has items")),
            Some(queue) if !queue.is_empty() => Ok(queue[0].clone()),
            _ => Err(ApiError::Network(format!("no route for {} {}", request.method.as_str(), request.url))),
        }
    }
}

pub fn task_json(id: u32, status: &str, priority: &str) -> String {
    format!(
        r#"{{"id":{},"title":"Task {}","description":null,"priority":"{}","status":"{}","due_date":null,"created_at":"2025-01-01T10:00:00Z","completed_at":null,"is_overdue":false}}"#,
        id, id, priority, status
    )
}

pub const STATS_JSON: &str = r#"{"total":2,"completed":1,"pending":1,"in_progress":0,"cancelled":0,"overdue":0,"by_priority":{"urgent":0,"high":1,"medium":1,"low":0}}"#;

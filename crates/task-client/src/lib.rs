//! Task Manager Client Core
//!
//! Everything the web UI needs that does not touch the DOM: backend models,
//! form validation, derived display state, the session store, and the REST
//! client with the page flows built on it.

pub mod api;
pub mod config;
pub mod derive;
pub mod error;
pub mod filter;
pub mod flows;
pub mod models;
pub mod routes;
pub mod session;
pub mod validation;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, ApiRequest, ApiResponse, Method, Transport};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use filter::{apply_filter, TaskFilter};
pub use flows::{LoginOutcome, RegisterOutcome, Resync, TaskBoard};
pub use models::{Priority, PriorityCounts, Session, Stats, Status, Task, TaskPayload, User};
pub use routes::Route;
pub use session::{KeyValueStore, SessionStore};
pub use validation::{Field, FormErrors, LoginForm, RegisterForm, TaskFormFields};

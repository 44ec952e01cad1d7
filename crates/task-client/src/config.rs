//! Client Configuration
//!
//! Backend location and UI timing constants, fixed at startup.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Runtime configuration shared by every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash
    pub api_base_url: String,
    /// How long the login success popup stays before redirecting
    pub login_redirect_delay_ms: u32,
    /// How long error popups stay visible
    pub error_popup_ms: u32,
    /// Spinner time on the landing page logout button
    pub logout_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_redirect_delay_ms: 2000,
            error_popup_ms: 3000,
            logout_delay_ms: 1500,
        }
    }
}

impl ClientConfig {
    /// Build from an optional base URL override (e.g. `option_env!("TASK_API_BASE_URL")`)
    pub fn from_base_url(base_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        config
    }
}

//! Configuration handling for the back-office

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default backend address
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

const BACKEND_URL_VAR: &str = "EVENTDESK_BACKEND_URL";
const API_TOKEN_VAR: &str = "EVENTDESK_API_TOKEN";

/// User configuration for the back-office
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Backend base URL
    pub backend_url: Option<String>,
    /// Bearer token sent with every request
    pub api_token: Option<String>,
    /// Per-request timeout
    pub request_timeout_secs: Option<u64>,
    /// How long flash toasts stay up
    pub toast_seconds: Option<u64>,
}

impl AdminConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "eventdesk", "eventdesk-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                config = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
            }
        }

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Replace fields with values found through `lookup`
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(BACKEND_URL_VAR).filter(|v| !v.trim().is_empty()) {
            self.backend_url = Some(url);
        }
        if let Some(token) = lookup(API_TOKEN_VAR).filter(|v| !v.trim().is_empty()) {
            self.api_token = Some(token);
        }
        self
    }

    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    /// Per-request timeout, never below one second
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(30).max(1))
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_seconds
            .map(Duration::from_secs)
            .unwrap_or(crate::state::TOAST_DURATION)
    }
}

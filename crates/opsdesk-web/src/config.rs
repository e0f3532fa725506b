/// Application configuration
///
/// Storage keys, the login route and toast settings. Defaults match the
/// keys written by the login flow; a JSON document can be baked in at build
/// time through the `OPSDESK_CONFIG` environment variable to override them.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WebError};

/// Accepted range for `toast_seconds`
pub const TOAST_SECONDS_RANGE: std::ops::RangeInclusive<u32> = 1..=3600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageKeys,

    /// Route the logout control navigates to
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Toast title shown after logging out
    #[serde(default = "default_logout_message")]
    pub logout_message: String,

    /// Seconds before a success toast is dismissed
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageKeys {
    /// Opaque credential removed on logout
    #[serde(default = "default_token_key")]
    pub token: String,

    /// JSON-encoded logged-in user record
    #[serde(default = "default_user_key")]
    pub logged_in_user: String,
}

fn default_login_path() -> String {
    crate::navigation::paths::LOGIN.to_string()
}

fn default_logout_message() -> String {
    "Logged out successfully".to_string()
}

fn default_toast_seconds() -> u32 {
    3
}

fn default_token_key() -> String {
    "token".to_string()
}

fn default_user_key() -> String {
    "loggedInUser".to_string()
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            token: default_token_key(),
            logged_in_user: default_user_key(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            login_path: default_login_path(),
            logout_message: default_logout_message(),
            toast_seconds: default_toast_seconds(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build-time override if present and valid, defaults otherwise
    pub fn load() -> Self {
        match option_env!("OPSDESK_CONFIG") {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("Ignoring OPSDESK_CONFIG: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.token.is_empty() || self.storage.logged_in_user.is_empty() {
            return Err(WebError::config("storage keys must not be empty"));
        }

        if !self.login_path.starts_with('/') {
            return Err(WebError::config(format!(
                "login_path must be absolute, got {:?}",
                self.login_path
            )));
        }

        if !TOAST_SECONDS_RANGE.contains(&self.toast_seconds) {
            return Err(WebError::config(format!(
                "toast_seconds must be within {}..={}, got {}",
                TOAST_SECONDS_RANGE.start(),
                TOAST_SECONDS_RANGE.end(),
                self.toast_seconds
            )));
        }

        Ok(())
    }
}

/// Make the configuration available to descendant components
pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// Configuration from context, defaults when no provider is mounted
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

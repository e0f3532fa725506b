/// Type definitions for the OpsDesk web interface
///
/// Shared types for the persisted session record and UI notifications.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Logged-in user record as persisted by the login flow
///
/// Only `role` and `routes` are read here; any other fields written by the
/// login flow are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    #[serde(default)]
    pub role: String,
    /// Delivery route labels, only meaningful for the privileged role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<String>>,
}

/// Success toast, dismissed automatically after `duration` seconds
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: Option<String>,
    pub duration: u32, // seconds
}

impl Notification {
    pub fn success(title: impl Into<String>, message: Option<String>, duration: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message,
            duration,
        }
    }

    /// Timer delay; saturates instead of wrapping to a near-zero timeout
    pub fn dismiss_after_ms(&self) -> u32 {
        self.duration.saturating_mul(1000)
    }
}

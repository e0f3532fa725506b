/// Persisted session access
///
/// The sidebar never reads `localStorage` directly: it asks a
/// `SessionProvider` taken from context, so tests and server rendering can
/// substitute their own source.

use std::rc::Rc;

use leptos::*;

use crate::auth::policy::{has_capability, Capability, Role};
use crate::config::AppConfig;
use crate::error::{Result, WebError};
use crate::types::SessionRecord;

/// Source of the logged-in user record
pub trait SessionProvider {
    /// `Ok(None)` when nobody is logged in
    fn load(&self) -> Result<Option<SessionRecord>>;
}

/// Parse a stored record; a literal `null` counts as absent
pub fn parse_record(raw: &str) -> Result<Option<SessionRecord>> {
    Ok(serde_json::from_str::<Option<SessionRecord>>(raw)?)
}

pub(crate) fn local_storage() -> Result<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| WebError::storage("no window"))?;
    window
        .local_storage()
        .map_err(|e| WebError::storage(format!("localStorage access denied: {:?}", e)))?
        .ok_or_else(|| WebError::storage("localStorage unavailable"))
}

/// Reads the record from browser `localStorage`
#[derive(Debug, Clone)]
pub struct BrowserSessionProvider {
    key: String,
}

impl BrowserSessionProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.storage.logged_in_user.clone())
    }
}

impl SessionProvider for BrowserSessionProvider {
    fn load(&self) -> Result<Option<SessionRecord>> {
        let raw = local_storage()?
            .get_item(&self.key)
            .map_err(|e| WebError::storage(format!("failed to read {}: {:?}", self.key, e)))?;

        match raw {
            Some(raw) => parse_record(&raw),
            None => Ok(None),
        }
    }
}

/// Fixed record, for server rendering and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    raw: Option<String>,
}

impl StaticSessionProvider {
    /// Nobody logged in
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stored JSON, parsed on every load like the browser value would be
    pub fn from_json(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn from_record(record: &SessionRecord) -> Result<Self> {
        Ok(Self::from_json(serde_json::to_string(record)?))
    }
}

impl SessionProvider for StaticSessionProvider {
    fn load(&self) -> Result<Option<SessionRecord>> {
        match &self.raw {
            Some(raw) => parse_record(raw),
            None => Ok(None),
        }
    }
}

/// Role and assigned routes derived once per sidebar mount
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub role: String,
    pub assigned_routes: Vec<String>,
}

impl SessionState {
    pub fn from_record(record: SessionRecord) -> Self {
        let assigned_routes = if has_capability(Role::parse(&record.role), Capability::ViewAssignedRoutes) {
            record.routes.unwrap_or_default()
        } else {
            Vec::new()
        };

        Self {
            role: record.role,
            assigned_routes,
        }
    }

    /// Missing or unreadable records fall back to the unauthenticated state
    pub fn load(provider: &dyn SessionProvider) -> Self {
        match provider.load() {
            Ok(Some(record)) => {
                log::debug!("Loaded session for role {:?}", record.role);
                Self::from_record(record)
            }
            Ok(None) => {
                log::debug!("No persisted session");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring persisted session: {}", e);
                Self::default()
            }
        }
    }
}

/// Context handle for the injected session provider
#[derive(Clone)]
pub struct SessionSource(Rc<dyn SessionProvider>);

impl SessionSource {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn load(&self) -> SessionState {
        SessionState::load(self.0.as_ref())
    }
}

pub fn provide_session_source(source: SessionSource) {
    provide_context(source);
}

/// Provider from context, the browser store when none was provided
pub fn use_session_source() -> SessionSource {
    use_context::<SessionSource>().unwrap_or_else(|| {
        let config = crate::config::use_app_config();
        SessionSource::new(BrowserSessionProvider::from_config(&config))
    })
}

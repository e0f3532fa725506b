/// Sign-out sequence
///
/// Remove the token, tell the user, go to the login view. Each side effect
/// sits behind a small trait so the order can be checked off-browser.

use leptos_router::NavigateOptions;

use crate::auth::session::local_storage;
use crate::config::AppConfig;
use crate::error::{Result, WebError};

/// Persisted credential storage
pub trait TokenStore {
    fn remove(&self, key: &str) -> Result<()>;
}

/// Fire-and-forget user feedback
pub trait Notifier {
    fn success(&self, title: &str);
}

/// Client-side navigation
pub trait Navigator {
    /// Replaces the current history entry
    fn navigate(&self, path: &str);
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn remove(&self, key: &str) -> Result<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| WebError::storage(format!("failed to remove {}: {:?}", key, e)))
    }
}

/// Adapts the closure returned by `leptos_router::use_navigate`
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.navigate)(
            path,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }
}

/// Runs every step regardless of earlier failures
pub fn sign_out(
    config: &AppConfig,
    store: &dyn TokenStore,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) {
    match store.remove(&config.storage.token) {
        Ok(()) => log::info!("Removed {} from storage", config.storage.token),
        Err(e) => log::warn!("Could not clear session token: {}", e),
    }

    notifier.success(&config.logout_message);
    navigator.navigate(&config.login_path);
}

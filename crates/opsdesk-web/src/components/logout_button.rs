/// Logout control
///
/// Last item of the sidebar. Clears the stored token, shows a toast and
/// sends the user to the login view.

use leptos::*;
use leptos_router::*;

use crate::auth::{sign_out, BrowserTokenStore, RouterNavigator};
use crate::components::icons::NavIconView;
use crate::components::notifications::use_notifications;
use crate::config::use_app_config;
use crate::navigation::NavIcon;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let config = use_app_config();
    let notifications = use_notifications();
    let navigator = RouterNavigator::new(use_navigate());

    let handle_logout = move |_| {
        sign_out(&config, &BrowserTokenStore, &notifications, &navigator);
    };

    view! {
        <button
            type="button"
            on:click=handle_logout
            class="w-full flex items-center gap-3 px-3 py-2 rounded-lg text-sm text-white/90 hover:bg-red-500/30 transition-colors"
        >
            <NavIconView icon=NavIcon::Logout/>
            <span>"Logout"</span>
        </button>
    }
}

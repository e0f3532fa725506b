/// SVG icons
///
/// Outline icons (24x24, stroke-based) for sidebar links and toasts.

use leptos::*;

use crate::navigation::NavIcon;

fn nav_icon_path(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Home => "M3 12l9-9 9 9M5 10v10h5v-6h4v6h5V10",
        NavIcon::Users => "M17 20h5v-2a4 4 0 00-5-3.9M9 20H2v-2a4 4 0 014-4h2a4 4 0 014 4v2M12 7a3 3 0 11-6 0 3 3 0 016 0zm8 2a2 2 0 11-4 0 2 2 0 014 0z",
        NavIcon::Box => "M20 7l-8-4-8 4m16 0l-8 4m8-4v10l-8 4m0-10L4 7m8 4v10M4 7v10l8 4",
        NavIcon::Cart => "M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.3 2.3c-.6.6-.2 1.7.7 1.7H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z",
        NavIcon::Database => "M4 7c0-1.7 3.6-3 8-3s8 1.3 8 3-3.6 3-8 3-8-1.3-8-3zm0 0v10c0 1.7 3.6 3 8 3s8-1.3 8-3V7M4 12c0 1.7 3.6 3 8 3s8-1.3 8-3",
        NavIcon::Tag => "M7 7h.01M7 3h5c.5 0 1 .2 1.4.6l7 7a2 2 0 010 2.8l-7 7a2 2 0 01-2.8 0l-7-7A2 2 0 013 12V7a4 4 0 014-4z",
        NavIcon::Chart => "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6h6zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0h6m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14h-6z",
        NavIcon::Truck => "M9 17a2 2 0 11-4 0 2 2 0 014 0zm10 0a2 2 0 11-4 0 2 2 0 014 0zM13 16V6H3v10h2m8 0h2m-2 0H9m6 0h2v-5l-3-3h-3",
        NavIcon::Settings => "M12 15a3 3 0 100-6 3 3 0 000 6zM19.4 15a1.7 1.7 0 00.3 1.8l.1.1a2 2 0 11-2.8 2.8l-.1-.1a1.7 1.7 0 00-2.9 1.2V21a2 2 0 11-4 0v-.1a1.7 1.7 0 00-2.9-1.2l-.1.1a2 2 0 11-2.8-2.8l.1-.1A1.7 1.7 0 003 15H3a2 2 0 110-4h.1a1.7 1.7 0 001.2-2.9l-.1-.1a2 2 0 112.8-2.8l.1.1A1.7 1.7 0 0010 4.1V4a2 2 0 114 0v.1a1.7 1.7 0 002.9 1.2l.1-.1a2 2 0 112.8 2.8l-.1.1a1.7 1.7 0 001.2 2.9h.1a2 2 0 110 4h-.1a1.7 1.7 0 00-1.5 1z",
        NavIcon::User => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
        NavIcon::Key => "M15 7a2 2 0 012 2m4 0a6 6 0 01-7.7 5.7L11 17H9v2H7v2H4a1 1 0 01-1-1v-2.6c0-.3.1-.5.3-.7l6-6A6 6 0 1121 9z",
        NavIcon::Sliders => "M4 21v-7M4 10V3M12 21v-9M12 8V3M20 21v-5M20 12V3M1 14h6M9 8h6M17 16h6",
        NavIcon::Shield => "M9 12l2 2 4-4m5.6-4A12 12 0 0112 2.9 12 12 0 013.4 6 12 12 0 003 9c0 5.6 3.8 10.3 9 11.6 5.2-1.3 9-6 9-11.6 0-1-.1-2-.4-3z",
        NavIcon::Lock => "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z",
        NavIcon::Map => "M9 20l-5.4-2.7A1 1 0 013 16.4V5.6a1 1 0 011.4-.9L9 7m0 13l6-3m-6 3V7m6 10l4.6 2.3A1 1 0 0021 18.4V7.6a1 1 0 00-.6-.9L15 4m0 13V4m0 0L9 7",
        NavIcon::Logout => "M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1",
    }
}

#[component]
fn OutlineIcon(
    d: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=d/>
        </svg>
    }
}

#[component]
pub fn NavIconView(
    icon: NavIcon,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! { <OutlineIcon d=nav_icon_path(icon) class=class/> }
}

#[component]
pub fn ChevronIcon(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            class=move || format!(
                "w-4 h-4 transition-transform duration-200 {}",
                if open.get() { "rotate-90" } else { "" }
            )
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"/>
        </svg>
    }
}

#[component]
pub fn CheckIcon() -> impl IntoView {
    view! { <OutlineIcon d="M5 13l4 4L19 7"/> }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! { <OutlineIcon d="M6 18L18 6M6 6l12 12" class="w-4 h-4"/> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{all_entries, DisclosureSection};

    #[test]
    fn test_every_catalog_icon_has_path() {
        let icons = all_entries()
            .map(|entry| entry.icon)
            .chain(DisclosureSection::ALL.into_iter().map(|s| s.icon()))
            .chain(std::iter::once(NavIcon::Logout));

        for icon in icons {
            let d = nav_icon_path(icon);
            assert!(d.starts_with('M'), "{:?} path must start with a moveto", icon);
        }
    }
}

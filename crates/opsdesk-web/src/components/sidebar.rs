/// Sidebar navigation component
///
/// Left navigation with the fixed link set, three collapsible sections,
/// the administration block and assigned routes for the privileged role,
/// and the logout control at the bottom.

use leptos::*;
use leptos_router::*;

use crate::auth::{use_session_source, SessionState};
use crate::components::icons::{ChevronIcon, NavIconView};
use crate::components::logout_button::LogoutButton;
use crate::navigation::{
    DisclosureSection, MenuLayout, NavEntry, NavIcon, OpenSections, BASE_LINKS, PRIVILEGED_LINKS,
};

const LINK_CLASS: &str =
    "flex items-center gap-3 px-3 py-2 rounded-lg text-sm text-white/90 hover:bg-white/10 transition-colors";
const ACTIVE_CLASS: &str = "bg-white/20 font-semibold text-white";
const HEADING_CLASS: &str = "px-3 text-xs font-semibold uppercase tracking-wider text-white/60";

#[component]
pub fn Sidebar() -> impl IntoView {
    let source = use_session_source();
    let (session, set_session) = create_signal(SessionState::default());

    // localStorage only exists in the browser; effects never run during SSR
    create_effect(move |_| {
        set_session.set(source.load());
    });

    let layout = create_memo(move |_| session.with(MenuLayout::for_session));

    view! { <SidebarView layout=layout/> }
}

/// Sidebar markup for an already resolved layout
#[component]
pub fn SidebarView(#[prop(into)] layout: Signal<MenuLayout>) -> impl IntoView {
    let open_sections = create_rw_signal(OpenSections::default());

    let toggle = Callback::new(move |section: DisclosureSection| {
        open_sections.update(|open| open.toggle(section));
    });

    view! {
        <aside class=move || format!(
            "flex flex-col w-64 min-h-screen flex-shrink-0 text-white shadow-xl {}",
            layout.with(|l| l.theme.gradient_class())
        )>
            <div class="px-6 py-5 border-b border-white/10">
                <span class="text-xl font-bold tracking-wide">"OpsDesk"</span>
            </div>

            <nav class="flex-1 overflow-y-auto px-3 py-4 space-y-1" aria-label="Main navigation">
                {BASE_LINKS
                    .iter()
                    .map(|entry| view! { <SidebarLink entry=*entry/> })
                    .collect_view()}

                {DisclosureSection::ALL
                    .into_iter()
                    .map(|section| view! {
                        <DisclosureGroup
                            section=section
                            open=Signal::derive(move || open_sections.with(|open| open.is_open(section)))
                            on_toggle=toggle
                        />
                    })
                    .collect_view()}

                <Show when=move || layout.with(|l| l.show_privileged_links)>
                    <div class="pt-4 mt-4 border-t border-white/10 space-y-1">
                        <p class=HEADING_CLASS>"Administration"</p>
                        {PRIVILEGED_LINKS
                            .iter()
                            .map(|entry| view! { <SidebarLink entry=*entry/> })
                            .collect_view()}
                    </div>
                </Show>

                <Show when=move || layout.with(|l| l.show_assigned_routes())>
                    <AssignedRoutes routes=Signal::derive(move || layout.with(|l| l.assigned_routes.clone()))/>
                </Show>
            </nav>

            <div class="px-3 py-4 border-t border-white/10">
                <LogoutButton/>
            </div>
        </aside>
    }
}

/// Link highlighting is left to the router's own matching
#[component]
fn SidebarLink(entry: NavEntry) -> impl IntoView {
    view! {
        <A href=entry.path exact=true class=LINK_CLASS active_class=ACTIVE_CLASS>
            <NavIconView icon=entry.icon/>
            <span>{entry.label}</span>
        </A>
    }
}

#[component]
fn DisclosureGroup(
    section: DisclosureSection,
    #[prop(into)]
    open: Signal<bool>,
    on_toggle: Callback<DisclosureSection>,
) -> impl IntoView {
    let panel_id = format!("sidebar-{}", section.title().to_lowercase());
    let controls = panel_id.clone();

    view! {
        <div>
            <button
                type="button"
                class=format!("w-full {}", LINK_CLASS)
                aria-controls=controls
                aria-expanded=move || open.get().to_string()
                on:click=move |_| on_toggle.call(section)
            >
                <NavIconView icon=section.icon()/>
                <span class="flex-1 text-left">{section.title()}</span>
                <ChevronIcon open=open/>
            </button>

            <Show when=move || open.get()>
                <div id=panel_id.clone() class="ml-4 mt-1 pl-3 border-l border-white/10 space-y-1">
                    {section
                        .entries()
                        .iter()
                        .map(|entry| view! { <SidebarLink entry=*entry/> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn AssignedRoutes(#[prop(into)] routes: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="pt-4 mt-4 border-t border-white/10">
            <p class=HEADING_CLASS>"Assigned Routes"</p>
            <ul class="mt-2 space-y-1">
                {move || routes
                    .get()
                    .into_iter()
                    .map(|route| view! {
                        <li class="flex items-center gap-3 px-3 py-1.5 text-sm text-white/80">
                            <NavIconView icon=NavIcon::Map class="w-4 h-4"/>
                            <span>{route}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

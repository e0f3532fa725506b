/// Main application component and routing
///
/// Defines the root App component with routing and the context providers
/// the sidebar and logout control depend on.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::auth::{provide_session_source, BrowserSessionProvider, SessionSource};
use crate::components::notifications::NotificationProvider;
use crate::components::shell::Shell;
use crate::config::{provide_app_config, AppConfig};
use crate::navigation::paths;
use crate::pages::{login::LoginPage, not_found::NotFoundPage, section::SectionPage};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = AppConfig::load();
    provide_session_source(SessionSource::new(BrowserSessionProvider::from_config(&config)));
    provide_app_config(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/opsdesk-web.css"/>
        <Title text="OpsDesk Admin"/>
        <Meta name="description" content="OpsDesk administration dashboard"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <NotificationProvider>
                <Routes>
                    <Route path=paths::LOGIN view=LoginPage/>
                    <Route path="/" view=|| view! { <Redirect path=paths::DASHBOARD/> }/>

                    // Every catalog destination renders inside the sidebar shell
                    <Route path=paths::DASHBOARD view=DashboardLayout>
                        <Route path="" view=SectionPage/>
                        <Route path="*section" view=SectionPage/>
                    </Route>

                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </NotificationProvider>
        </Router>
    }
}

#[component]
fn DashboardLayout() -> impl IntoView {
    view! {
        <Shell>
            <Outlet/>
        </Shell>
    }
}

/// Shell component that wraps the dashboard layout
///
/// Sidebar on the left, routed content on the right.

use leptos::*;

use crate::components::sidebar::Sidebar;

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-gray-50">
            <Sidebar/>

            <main class="flex-1 overflow-hidden">
                <div class="h-full overflow-y-auto">
                    <div class="container mx-auto px-6 py-6 max-w-7xl">
                        {children()}
                    </div>
                </div>
            </main>
        </div>
    }
}

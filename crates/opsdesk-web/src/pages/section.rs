/// Dashboard section page
///
/// Placeholder content for every sidebar destination, titled from the link
/// catalog. Paths outside the catalog fall through to the 404 page.

use leptos::*;
use leptos_router::*;

use crate::navigation::label_for_path;
use crate::pages::not_found::NotFoundPage;

#[component]
pub fn SectionPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let label = move || pathname.with(|path| label_for_path(path));

    move || match label() {
        Some(label) => view! {
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{label}</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        {pathname}
                    </p>
                </div>

                <div class="bg-white rounded-lg border border-gray-200 p-8 text-center">
                    <p class="text-gray-600">
                        {format!("{} interface coming soon...", label)}
                    </p>
                </div>
            </div>
        }
        .into_view(),
        None => view! { <NotFoundPage/> }.into_view(),
    }
}

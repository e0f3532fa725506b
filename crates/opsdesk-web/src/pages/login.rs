/// Login landing page
///
/// Target of the logout control. Credentials are issued by the account
/// service; this page only confirms the signed-out state.

use leptos::*;
use leptos_router::*;

use crate::navigation::paths;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4">
            <div class="max-w-md w-full space-y-6 text-center">
                <h2 class="text-3xl font-extrabold text-gray-900">
                    "Sign in to OpsDesk"
                </h2>
                <p class="text-sm text-gray-600">
                    "You are signed out. Sign in through your account service to continue."
                </p>
                <A
                    href=paths::DASHBOARD
                    class="inline-flex items-center px-4 py-2 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700"
                >
                    "Go to Dashboard"
                </A>
            </div>
        </div>
    }
}

/// Notification system for user feedback
///
/// Success toasts that dismiss themselves after the configured duration,
/// or earlier through their close button.

use leptos::*;
use uuid::Uuid;

use crate::auth::Notifier;
use crate::components::icons::{CheckIcon, CloseIcon};
use crate::config::use_app_config;
use crate::types::Notification;

/// Notification context for managing toast notifications
#[derive(Debug, Clone)]
pub struct NotificationContext {
    pub notifications: ReadSignal<Vec<Notification>>,
    pub show_success: Callback<(String, Option<String>)>,
    pub remove_notification: Callback<Uuid>,
}

impl Notifier for NotificationContext {
    fn success(&self, title: &str) {
        self.show_success.call((title.to_string(), None));
    }
}

/// Notification provider component
#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let toast_seconds = use_app_config().toast_seconds;

    let (notifications, set_notifications) = create_signal::<Vec<Notification>>(Vec::new());

    let show_success = move |(title, message): (String, Option<String>)| {
        let notification = Notification::success(title, message, toast_seconds);
        let id = notification.id;

        gloo_timers::callback::Timeout::new(notification.dismiss_after_ms(), move || {
            set_notifications.update(|notifications| {
                notifications.retain(|n| n.id != id);
            });
        })
        .forget();

        set_notifications.update(|notifications| notifications.push(notification));
    };

    let remove_notification = move |id: Uuid| {
        set_notifications.update(|notifications| {
            notifications.retain(|n| n.id != id);
        });
    };

    let context = NotificationContext {
        notifications,
        show_success: Callback::new(show_success),
        remove_notification: Callback::new(remove_notification),
    };

    provide_context(context);

    view! {
        {children()}
        <NotificationContainer/>
    }
}

/// Hook to access notification context
pub fn use_notifications() -> NotificationContext {
    expect_context::<NotificationContext>()
}

/// Container that renders all active notifications
#[component]
fn NotificationContainer() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2 max-w-sm">
            <For
                each=move || notifications.notifications.get()
                key=|notification| notification.id
                children=move |notification| {
                    view! { <NotificationToast notification=notification /> }
                }
            />
        </div>
    }
}

/// Individual notification toast component
#[component]
fn NotificationToast(notification: Notification) -> impl IntoView {
    let notifications = use_notifications();
    let notification_id = notification.id;

    view! {
        <div
            role="status"
            class="rounded-lg border border-green-200 bg-green-50 p-4 shadow-lg transition-all duration-300"
        >
            <div class="flex">
                <div class="flex-shrink-0 w-5 h-5 text-green-800">
                    <CheckIcon/>
                </div>
                <div class="ml-3 flex-1">
                    <h3 class="text-sm font-medium text-green-800">
                        {notification.title}
                    </h3>
                    {notification.message.map(|message| view! {
                        <div class="mt-1 text-sm text-green-800">{message}</div>
                    })}
                </div>
                <div class="ml-4 flex-shrink-0">
                    <button
                        class="inline-flex rounded-md p-1.5 text-green-800 focus:outline-none"
                        on:click=move |_| {
                            notifications.remove_notification.call(notification_id);
                        }
                    >
                        <span class="sr-only">"Dismiss"</span>
                        <CloseIcon/>
                    </button>
                </div>
            </div>
        </div>
    }
}

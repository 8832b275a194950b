//! Toast stack for upload notifications.

use leptos::*;

use crate::services::Toast;

#[component]
pub fn NotificationStack(toasts: ReadSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="notification-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let level = toast.notification.level;
                    view! {
                        <div class=format!("notification {}", level.css_class())>
                            <span class="notification-icon">{level.emoji()}</span>
                            " "
                            {toast.notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

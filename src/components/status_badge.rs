//! Status Badge Component
//!
//! Transient pending/success/error indicator with auto-dismiss.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::status::RequestStatus;

#[component]
pub fn StatusBadge(status: RwSignal<RequestStatus>) -> impl IntoView {
    view! {
        <span class=move || status.with(|s| s.css_class()) role="status">
            {move || status.with(|s| s.message().map(str::to_string))}
        </span>
    }
}

/// Show `next`, then clear it after its dismiss delay and run `on_dismiss`.
/// Nothing happens if the status changed or its owner was disposed meanwhile.
pub fn show_status<F>(status: RwSignal<RequestStatus>, next: RequestStatus, config: &AppConfig, on_dismiss: F)
where
    F: FnOnce() + 'static,
{
    let delay = next.dismiss_after(config);
    status.set(next.clone());

    if let Some(ms) = delay {
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            if status.try_get_untracked() == Some(next) {
                status.try_set(RequestStatus::Idle);
                on_dismiss();
            }
        });
    }
}

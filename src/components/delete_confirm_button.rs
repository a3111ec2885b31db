//! Delete Confirm Button Component
//!
//! Inline delete button that must be clicked twice.

use leptos::prelude::*;

use crate::confirm::{ConfirmOutcome, ConfirmState};

/// Click-twice delete button
///
/// The first click arms it; a second click while armed runs `on_confirm`.
/// Unmounting (closing the host dialog) drops the armed state.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let state = RwSignal::new(ConfirmState::Idle);

    view! {
        <button
            type="button"
            class=move || if state.get().is_armed() { "delete-btn armed" } else { "delete-btn" }
            disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                if state.try_update(|s| s.click()) == Some(ConfirmOutcome::Confirmed) {
                    on_confirm.run(());
                }
            }
            on:blur=move |_| state.update(|s| s.reset())
        >
            {move || if state.get().is_armed() { "Click again to delete" } else { "Delete" }}
        </button>
    }
}

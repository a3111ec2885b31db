//! New Item Modal Component
//!
//! Form for appending a new entry to a lookup table.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{show_status, Modal, StatusBadge};
use crate::context::use_app_context;
use crate::lookup::LookupResource;
use crate::status::RequestStatus;
use crate::store::{LookupStateStoreFields, LookupStore};
use crate::sync::create_item;

/// Create dialog; the new item gets `order = current length`
#[component]
pub fn NewItemModal(
    resource: LookupResource,
    store: LookupStore,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (new_label, set_new_label) = signal(String::new());
    let status = RwSignal::new(RequestStatus::Idle);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().blocks_submit() { return; }

        let label = new_label.get_untracked();
        let len = store.items().with_untracked(|items| items.len());
        let api = ctx.api.clone();
        let config = ctx.config.clone();
        status.set(RequestStatus::Pending);

        spawn_local(async move {
            match create_item(&api, resource, &label, len).await {
                Ok(()) => {
                    log::info!("[NEW] Created \"{}\" in {} at {}", label, resource.path(), len);
                    on_saved.run(());
                    show_status(status, RequestStatus::Success("Created".to_string()), &config, move || {
                        on_close.run(())
                    });
                }
                Err(e) => {
                    log::warn!("[NEW] Create in {} failed: {}", resource.path(), e);
                    show_status(status, RequestStatus::Failed(e.to_string()), &config, || {});
                }
            }
        });
    };

    view! {
        <Modal title=format!("New entry: {}", resource.title()) on_close=on_close>
            <form class="item-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || new_label.get()
                    on:input=move |ev| set_new_label.set(event_target_value(&ev))
                />
                <div class="form-actions">
                    <StatusBadge status=status />
                    <button type="submit" class="primary-btn" disabled=move || status.with(|s| s.blocks_submit())>
                        "Save"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

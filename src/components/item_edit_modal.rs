//! Item Edit Modal Component
//!
//! Rename an entry or delete it (with renumbering of the rest).

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{show_status, DeleteConfirmButton, Modal, StatusBadge};
use crate::context::use_app_context;
use crate::lookup::LookupResource;
use crate::models::OrderableItem;
use crate::status::RequestStatus;
use crate::store::{apply_local, LookupStateStoreFields, LookupStore};
use crate::sync::{delete_and_renumber, rename_item};

#[component]
pub fn ItemEditModal(
    item: OrderableItem,
    resource: LookupResource,
    store: LookupStore,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let rename_ctx = ctx.clone();

    let (label_value, set_label_value) = signal(item.label(resource.label_key()).to_string());
    let status = RwSignal::new(RequestStatus::Idle);
    let item = StoredValue::new(item);

    // Save name
    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().blocks_submit() { return; }

        let label = label_value.get_untracked();
        let target = item.get_value();
        let api = rename_ctx.api.clone();
        let config = rename_ctx.config.clone();
        status.set(RequestStatus::Pending);

        spawn_local(async move {
            match rename_item(&api, resource, &target, &label).await {
                Ok(_) => {
                    on_changed.run(());
                    show_status(status, RequestStatus::Success("Saved".to_string()), &config, move || {
                        on_close.run(())
                    });
                }
                Err(e) => {
                    log::warn!("[EDIT] Rename {} failed: {}", target.id, e);
                    show_status(status, RequestStatus::Failed(e.to_string()), &config, || {});
                }
            }
        });
    };

    // Delete, then renumber the remainder
    let delete = move |_: ()| {
        if status.get_untracked().blocks_submit() { return; }

        let id = item.with_value(|i| i.id.clone());
        let list = store.items().get_untracked();
        let api = ctx.api.clone();
        let config = ctx.config.clone();
        status.set(RequestStatus::Pending);

        spawn_local(async move {
            match delete_and_renumber(&api, resource, &list, &id).await {
                Ok(remaining) => {
                    apply_local(&store, remaining);
                    on_changed.run(());
                    show_status(status, RequestStatus::Success("Deleted".to_string()), &config, move || {
                        on_close.run(())
                    });
                }
                Err(e) => {
                    // Item stays; dialog stays open for another attempt
                    show_status(status, RequestStatus::Failed(format!("Could not delete: {e}")), &config, || {});
                }
            }
        });
    };

    view! {
        <Modal title=format!("Edit entry: {}", resource.title()) on_close=on_close>
            <form class="item-form" on:submit=save>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || label_value.get()
                    on:input=move |ev| set_label_value.set(event_target_value(&ev))
                />
                <div class="form-actions">
                    <StatusBadge status=status />
                    <DeleteConfirmButton
                        on_confirm=delete
                        disabled=Signal::derive(move || status.with(|s| s.blocks_submit()))
                    />
                    <button type="submit" class="primary-btn" disabled=move || status.with(|s| s.blocks_submit())>
                        "Save"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

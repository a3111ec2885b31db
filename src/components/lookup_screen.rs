//! Lookup Screen Component
//!
//! One page per lookup table: loads the collection, shows the orderable
//! list, and hosts the create and edit dialogs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ItemEditModal, NewItemModal, OrderableList};
use crate::context::use_app_context;
use crate::lookup::LookupResource;
use crate::models::OrderableItem;
use crate::store::{create_lookup_store, refresh, LoadState, LookupStateStoreFields};

#[component]
pub fn LookupScreen(resource: LookupResource) -> impl IntoView {
    let ctx = use_app_context();
    let store = create_lookup_store();

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (creating, set_creating) = signal(false);
    let (editing, set_editing) = signal(None::<OrderableItem>);

    // Load on mount and whenever a reload is requested
    let api = ctx.api.clone();
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[APP] Loading {}, trigger={}", resource.path(), trigger);
        let api = api.clone();
        spawn_local(async move {
            refresh(store, &api, resource).await;
        });
    });

    let reload = Callback::new(move |_: ()| set_reload_trigger.update(|v| *v += 1));
    let load = Memo::new(move |_| store.load().get());

    view! {
        <section class="lookup-screen">
            <header class="page-header">
                <h1>{resource.title()}</h1>
                <button
                    class="primary-btn"
                    disabled=move || load.get() != LoadState::Ready
                    on:click=move |_| set_creating.set(true)
                >
                    "New"
                </button>
            </header>

            {move || match load.get() {
                LoadState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                LoadState::Failed(_) => view! {
                    <div class="load-error">"Could not load data. Please try again later."</div>
                }.into_any(),
                LoadState::Ready => view! {
                    <OrderableList
                        resource=resource
                        store=store
                        on_select=move |item: OrderableItem| set_editing.set(Some(item))
                    />
                }.into_any(),
            }}

            <Show when=move || creating.get()>
                <NewItemModal
                    resource=resource
                    store=store
                    on_close=move |_: ()| set_creating.set(false)
                    on_saved=reload
                />
            </Show>

            {move || editing.get().map(|item| view! {
                <ItemEditModal
                    item=item
                    resource=resource
                    store=store
                    on_close=move |_: ()| set_editing.set(None)
                    on_changed=reload
                />
            })}
        </section>
    }
}

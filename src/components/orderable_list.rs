//! Orderable List Component
//!
//! Renders a lookup table as rows that can be dragged into a new order.
//! A drop renumbers locally at once, then persists every row's position in
//! the background and re-fetches to reconcile.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::lookup::LookupResource;
use crate::models::OrderableItem;
use crate::store::{LookupStateStoreFields, LookupStore};
use crate::sync::{apply_drop, persist_drop};

use leptos_dragdrop::*;

#[component]
pub fn OrderableList(
    resource: LookupResource,
    store: LookupStore,
    #[prop(into)] on_select: Callback<OrderableItem>,
) -> impl IntoView {
    let ctx = use_app_context();

    // Create DnD signals
    let dnd = create_dnd_signals();

    let api = ctx.api.clone();
    bind_global_mouseup(dnd, move |from, to| {
        // Optimistic: the drop result shows before any request settles
        let Some(local) = apply_drop(&store, from, to) else {
            return;
        };
        log::info!("[DND] {}: moved row {} -> {}", resource.path(), from, to);

        let api = api.clone();
        spawn_local(async move {
            persist_drop(store, &api, resource, local).await;
        });
    });

    let label_key = resource.label_key();
    let rows = move || {
        store
            .items()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <ul class=move || if dnd.any_dragging() { "orderable-list dragging" } else { "orderable-list" }>
            <For
                each=rows
                key=move |(index, item)| (*index, item.id.clone(), item.order, item.label(label_key).to_string())
                children=move |(index, item)| {
                    let id = item.id.clone();
                    let label = item.label(label_key).to_string();

                    // DnD handlers
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let on_mouseenter = make_on_row_mouseenter(dnd, index);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let row_class = move || {
                        let mut c = String::from("orderable-row");
                        if dnd.is_dragging(index) {
                            c.push_str(" dragging");
                        } else if dnd.is_drop_target(index) {
                            c.push_str(" drop-target");
                        }
                        c
                    };

                    view! {
                        <li
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                            on:click=move |_| {
                                if dnd.drag_just_ended() {
                                    return;
                                }
                                // Latest snapshot, not the one this row was rendered from
                                let current = store.items().with_untracked(|items| {
                                    items.iter().find(|i| i.id == id).cloned()
                                });
                                if let Some(current) = current {
                                    on_select.run(current);
                                }
                            }
                        >
                            <span class="drag-handle">"⠿"</span>
                            <span class="row-position">{index + 1}</span>
                            <span class="row-label">{label}</span>
                        </li>
                    }
                }
            />
        </ul>

        {move || store.items().with(|items| items.is_empty()).then(|| view! {
            <p class="empty-message">"No entries yet"</p>
        })}
    }
}

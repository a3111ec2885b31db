//! Sidebar Component
//!
//! Menu of lookup tables; the selection lives in `AppContext`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::lookup::LookupResource;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let selected = ctx.selected;

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">"Lookup tables"</div>
            {LookupResource::ALL.iter().map(|&resource| {
                let ctx = ctx.clone();
                let is_active = move || selected.get() == resource;
                view! {
                    <button
                        class=move || if is_active() { "sidebar-entry active" } else { "sidebar-entry" }
                        on:click=move |_| ctx.select(resource)
                    >
                        {resource.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

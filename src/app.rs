//! Lookup Admin App
//!
//! Sidebar menu plus the selected lookup-table screen.

use leptos::prelude::*;

use crate::api::RestClient;
use crate::components::{LookupScreen, Sidebar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::lookup::LookupResource;

#[component]
pub fn App(config: AppConfig, api: RestClient) -> impl IntoView {
    let (selected, set_selected) = signal(LookupResource::default());

    // Provide context to all children
    provide_context(AppContext::new((selected, set_selected), api, config));

    view! {
        <div class="app-layout">
            <Sidebar />

            // Each selection mounts a fresh screen with its own store
            <main class="main-content">
                {move || {
                    let resource = selected.get();
                    view! { <LookupScreen resource=resource /> }
                }}
            </main>
        </div>
    }
}

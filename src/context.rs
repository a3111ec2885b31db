//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::RestClient;
use crate::config::AppConfig;
use crate::lookup::LookupResource;

/// App-wide state provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Lookup screen selected in the sidebar - read
    pub selected: ReadSignal<LookupResource>,
    /// Lookup screen selected in the sidebar - write
    set_selected: WriteSignal<LookupResource>,
    pub api: RestClient,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(
        selected: (ReadSignal<LookupResource>, WriteSignal<LookupResource>),
        api: RestClient,
        config: AppConfig,
    ) -> Self {
        Self {
            selected: selected.0,
            set_selected: selected.1,
            api,
            config,
        }
    }

    /// Switch the sidebar to another lookup screen
    pub fn select(&self, resource: LookupResource) {
        if self.selected.get_untracked() != resource {
            log::info!("[APP] Switching to {}", resource.path());
            self.set_selected.set(resource);
        }
    }
}

/// Get the app context; panics outside `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

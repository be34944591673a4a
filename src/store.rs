//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Dex type names, fetched once and shared by filters and forms
    pub fakemon_types: Vec<String>,
    /// Whether a bearer token was present at startup
    pub authenticated: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Load the cached type list, fetching it on first use.
pub fn ensure_types_loaded(store: AppStore) {
    use leptos::task::spawn_local;

    if !store.fakemon_types().get_untracked().is_empty() {
        return;
    }
    spawn_local(async move {
        match crate::api::list_fakemon_types().await {
            Ok(types) => store.fakemon_types().set(types),
            Err(err) => web_sys::console::error_1(
                &format!("[STORE] Failed to load fakemon types: {err}").into(),
            ),
        }
    });
}

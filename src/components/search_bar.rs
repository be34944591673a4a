//! Search Bar Component
//!
//! Search-on-submit form used by the list pages.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(into)] placeholder: String,
    #[prop(into)] on_search: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <form class="admin-search-form" on:submit=submit>
            <input
                type="text"
                class="admin-search-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
            <button type="submit" class="button primary">
                <i class="fas fa-search"></i>
                " Search"
            </button>
        </form>
    }
}

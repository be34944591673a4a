//! Loading Indicator Component

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="admin-loading">
            <i class="fas fa-spinner fa-spin"></i>
            " "
            {message}
        </div>
    }
}

//! Stat Bar Component
//!
//! Horizontal fill bar under a stat input.

use leptos::prelude::*;

use crate::format::stat_bar_width;

#[component]
pub fn StatBar(value: Signal<u16>, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class="admin-stat-bar">
            <div
                class=format!("admin-stat-fill {class}")
                style:width=move || format!("{}%", stat_bar_width(value.get()))
            ></div>
        </div>
    }
}

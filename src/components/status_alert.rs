//! Status Alert Component
//!
//! Global success/error banner fed from the app context. Success messages
//! dismiss themselves after five seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, StatusKind};

#[component]
pub fn StatusAlert() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Auto-dismiss success banners; errors stay until replaced or closed.
    Effect::new(move |_| {
        let Some(message) = ctx.status.get() else {
            return;
        };
        if message.kind != StatusKind::Success {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(5_000).await;
            if ctx.status.get_untracked() == Some(message) {
                ctx.clear_status();
            }
        });
    });

    view! {
        {move || ctx.status.get().map(|message| {
            let (class, icon) = match message.kind {
                StatusKind::Success => ("admin-alert success", "fas fa-check-circle"),
                StatusKind::Error => ("admin-alert error", "fas fa-exclamation-circle"),
            };
            view! {
                <div class=class>
                    <i class=icon></i>
                    " "
                    {message.text.clone()}
                    <button class="admin-alert-close" on:click=move |_| ctx.clear_status()>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}

//! Confirm Modal Component
//!
//! Blocking confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Confirmation dialog with confirm/cancel actions.
///
/// Rendered by pages while their delete-target signal is set; the callbacks
/// close it.
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Delete".into())] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="admin-modal-overlay">
            <div class="admin-modal">
                <div class="admin-modal-header">
                    <h2>{title}</h2>
                </div>
                <div class="admin-modal-body">
                    <p>{message}</p>
                    <p class="admin-modal-warning">"This action cannot be undone."</p>
                </div>
                <div class="admin-modal-footer">
                    <button class="button secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="button danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

//! Fakemon List Page
//!
//! Paginated, searchable dex listing with edit/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ListQuery};
use crate::components::{ConfirmModal, LoadingIndicator, Pagination, SearchBar};
use crate::context::{AdminPage, AppContext};
use crate::models::Fakemon;
use crate::store::{ensure_types_loaded, use_app_store, AppStateStoreFields};

#[component]
pub fn FakemonListPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (rows, set_rows) = signal(Vec::<Fakemon>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (selected_type, set_selected_type) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (delete_target, set_delete_target) = signal::<Option<Fakemon>>(None);
    // Bumped on search submit; page/filter changes refetch on their own.
    let (search_tick, set_search_tick) = signal(0u32);

    ensure_types_loaded(store);

    Effect::new(move |_| {
        let _ = search_tick.get();
        let _ = ctx.reload_trigger.get();
        let query = ListQuery {
            page: page.get(),
            search: search.get_untracked(),
            filters: vec![("type", selected_type.get())],
            ..Default::default()
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_fakemon(&query).await {
                Ok(result) => {
                    set_rows.set(result.rows);
                    set_total_pages.set(result.total_pages);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[FAKEMON] Failed to load list: {err}").into(),
                    );
                    set_error.set(Some("Failed to load fakemon. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let confirm_delete = move |_| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        set_delete_target.set(None);
        spawn_local(async move {
            match api::delete_fakemon(&target.number).await {
                Ok(()) => {
                    set_rows.update(|rows| rows.retain(|m| m.number != target.number));
                    ctx.success(format!(
                        "Fakemon #{} ({}) deleted successfully",
                        target.number, target.name
                    ));
                }
                Err(err) => ctx.error(format!("Failed to delete fakemon: {err}")),
            }
        });
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">"Fakemon Management"</h1>
                <p class="admin-dashboard-subtitle">"Manage fakemon entries in the Fakedex"</p>
            </div>

            {move || error.get().map(|message| view! {
                <div class="admin-alert error">
                    <i class="fas fa-exclamation-circle"></i>
                    " "
                    {message}
                </div>
            })}

            <div class="admin-actions">
                <button class="button secondary" on:click=move |_| ctx.navigate(AdminPage::Dashboard)>
                    <i class="fas fa-arrow-left"></i>
                    " Back to Dashboard"
                </button>
                <button class="button primary" on:click=move |_| ctx.navigate(AdminPage::FakemonForm(None))>
                    <i class="fas fa-plus"></i>
                    " Add New Fakemon"
                </button>
            </div>

            <div class="admin-filters">
                <SearchBar
                    value=search
                    set_value=set_search
                    placeholder="Search fakemon..."
                    on_search=move |()| {
                        set_page.set(1);
                        set_search_tick.update(|v| *v += 1);
                    }
                />

                <div class="admin-filter-group">
                    <label for="typeFilter" class="admin-filter-label">"Filter by Type:"</label>
                    <select
                        id="typeFilter"
                        class="admin-filter-select"
                        prop:value=move || selected_type.get()
                        on:change=move |ev| {
                            set_page.set(1);
                            set_selected_type.set(event_target_value(&ev));
                        }
                    >
                        <option value="">"All Types"</option>
                        <For
                            each=move || store.fakemon_types().get()
                            key=|t| t.clone()
                            children=move |t| {
                                let value = t.clone();
                                view! { <option value=value>{t}</option> }
                            }
                        />
                    </select>
                </div>
            </div>

            {move || if loading.get() {
                view! { <LoadingIndicator message="Loading fakemon..." /> }.into_any()
            } else {
                view! {
                    <div class="admin-table-container">
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Number"</th>
                                    <th>"Image"</th>
                                    <th>"Name"</th>
                                    <th>"Types"</th>
                                    <th>"Category"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || if rows.get().is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="text-center">"No fakemon found"</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    view! {
                                        <For
                                            each=move || rows.get()
                                            key=|mon| mon.number.clone()
                                            children=move |mon| {
                                                let types: Vec<String> =
                                                    mon.types().iter().map(|t| t.to_string()).collect();
                                                let edit_number = mon.number.clone();
                                                let delete_mon = mon.clone();
                                                view! {
                                                    <tr>
                                                        <td>"#" {mon.number.clone()}</td>
                                                        <td>
                                                            <img
                                                                class="admin-fakemon-thumbnail"
                                                                src=mon.image_url.clone()
                                                                alt=mon.name.clone()
                                                            />
                                                        </td>
                                                        <td>{mon.name.clone()}</td>
                                                        <td class="fakemon-types-cell">
                                                            {types.into_iter().map(|t| {
                                                                let class = format!(
                                                                    "fakemon-type type-badge type-{}",
                                                                    t.to_lowercase()
                                                                );
                                                                view! { <span class=class>{t.clone()}</span> }
                                                            }).collect_view()}
                                                        </td>
                                                        <td>{if mon.category.is_empty() { "-".to_string() } else { mon.category.clone() }}</td>
                                                        <td class="admin-actions-cell">
                                                            <button
                                                                class="button info sm"
                                                                title="Edit Fakemon"
                                                                on:click=move |_| ctx.navigate(
                                                                    AdminPage::FakemonForm(Some(edit_number.clone()))
                                                                )
                                                            >
                                                                <i class="fas fa-edit"></i>
                                                            </button>
                                                            <button
                                                                class="button danger sm"
                                                                title="Delete Fakemon"
                                                                on:click=move |_| set_delete_target.set(Some(delete_mon.clone()))
                                                            >
                                                                <i class="fas fa-trash-alt"></i>
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    }.into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            <Pagination
                current=page.into()
                total=total_pages.into()
                on_select=move |p| set_page.set(p)
            />

            {move || delete_target.get().map(|target| view! {
                <ConfirmModal
                    title="Confirm Deletion"
                    message=format!(
                        "Are you sure you want to delete the fakemon #{} {}?",
                        target.number, target.name
                    )
                    confirm_label="Delete Fakemon"
                    on_confirm=confirm_delete
                    on_cancel=move |()| set_delete_target.set(None)
                />
            })}
        </div>
    }
}

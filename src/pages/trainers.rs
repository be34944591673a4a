//! Trainer Manager Page
//!
//! Paginated, sortable trainer table with delete (optional forfeit to the
//! bazar) and owner reassignment.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ListQuery, SortOrder};
use crate::components::{LoadingIndicator, Pagination, SearchBar};
use crate::context::{AdminPage, AppContext};
use crate::models::{AdminUser, Trainer};

#[component]
pub fn TrainerManagerPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (rows, set_rows) = signal(Vec::<Trainer>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (sort_by, set_sort_by) = signal("id".to_string());
    let (sort_order, set_sort_order) = signal(SortOrder::Desc);
    let (page, set_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (search_tick, set_search_tick) = signal(0u32);

    // Delete modal
    let (delete_target, set_delete_target) = signal::<Option<Trainer>>(None);
    let forfeit_to_bazar = RwSignal::new(true);
    let (deleting, set_deleting) = signal(false);

    // Change-owner modal
    let (owner_target, set_owner_target) = signal::<Option<Trainer>>(None);
    let (owner_search, set_owner_search) = signal(String::new());
    let (owner_results, set_owner_results) = signal(Vec::<AdminUser>::new());
    let (owner_searching, set_owner_searching) = signal(false);
    let (changing_owner, set_changing_owner) = signal(false);

    Effect::new(move |_| {
        let _ = search_tick.get();
        let _ = ctx.reload_trigger.get();
        let query = ListQuery {
            page: page.get(),
            search: search.get_untracked(),
            sort_by: sort_by.get(),
            sort_order: sort_order.get(),
            ..Default::default()
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_trainers(&query).await {
                Ok(result) => {
                    set_rows.set(result.rows);
                    set_total_pages.set(result.total_pages);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[TRAINERS] Failed to load list: {err}").into(),
                    );
                    set_error.set(Some("Failed to load trainers.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let sort_on = move |column: &'static str| {
        if sort_by.get_untracked() == column {
            set_sort_order.update(|order| *order = order.toggled());
        } else {
            set_sort_by.set(column.to_string());
            set_sort_order.set(SortOrder::Asc);
        }
        set_page.set(1);
    };

    let sort_marker = move |column: &'static str| {
        if sort_by.get() != column {
            ""
        } else if sort_order.get() == SortOrder::Asc {
            " ▲"
        } else {
            " ▼"
        }
    };

    let confirm_delete = move |_| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        let forfeit = forfeit_to_bazar.get_untracked();
        spawn_local(async move {
            match api::delete_trainer(target.id, forfeit).await {
                Ok(()) => {
                    set_rows.update(|rows| rows.retain(|t| t.id != target.id));
                    ctx.success(format!("Trainer {} deleted successfully", target.name));
                }
                Err(err) => ctx.error(format!("Failed to delete trainer: {err}")),
            }
            set_deleting.set(false);
            set_delete_target.set(None);
        });
    };

    let run_owner_search = move |_| {
        let term = owner_search.get_untracked();
        if term.is_empty() {
            set_owner_results.set(Vec::new());
            return;
        }
        set_owner_searching.set(true);
        spawn_local(async move {
            match api::search_users(&term).await {
                Ok(users) => set_owner_results.set(users),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[TRAINERS] User search failed: {err}").into(),
                    );
                    set_owner_results.set(Vec::new());
                }
            }
            set_owner_searching.set(false);
        });
    };

    let assign_owner = move |user: AdminUser| {
        let Some(target) = owner_target.get_untracked() else {
            return;
        };
        set_changing_owner.set(true);
        spawn_local(async move {
            match api::change_trainer_owner(target.id, user.id).await {
                Ok(updated) => {
                    set_rows.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|t| t.id == updated.id) {
                            *row = updated.clone();
                        }
                    });
                    ctx.success(format!(
                        "Trainer {} now belongs to {}",
                        target.name, user.username
                    ));
                }
                Err(err) => ctx.error(format!("Failed to change owner: {err}")),
            }
            set_changing_owner.set(false);
            set_owner_target.set(None);
            set_owner_search.set(String::new());
            set_owner_results.set(Vec::new());
        });
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">"Trainer Manager"</h1>
                <p class="admin-dashboard-subtitle">"Manage trainers and their profiles"</p>
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
            </div>

            <div class="admin-filters">
                <SearchBar
                    value=search
                    set_value=set_search
                    placeholder="Search trainers..."
                    on_search=move |()| {
                        set_page.set(1);
                        set_search_tick.update(|v| *v += 1);
                    }
                />
            </div>

            {move || if loading.get() {
                view! { <LoadingIndicator message="Loading trainers..." /> }.into_any()
            } else {
                view! {
                    <div class="admin-table-container">
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th class="sortable" on:click=move |_| sort_on("id")>
                                        {move || format!("ID{}", sort_marker("id"))}
                                    </th>
                                    <th class="sortable" on:click=move |_| sort_on("name")>
                                        {move || format!("Name{}", sort_marker("name"))}
                                    </th>
                                    <th>"Owner"</th>
                                    <th class="sortable" on:click=move |_| sort_on("monster_count")>
                                        {move || format!("Monsters{}", sort_marker("monster_count"))}
                                    </th>
                                    <th class="sortable" on:click=move |_| sort_on("created_at")>
                                        {move || format!("Created{}", sort_marker("created_at"))}
                                    </th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || if rows.get().is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="text-center">"No trainers found"</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    view! {
                                        <For
                                            each=move || rows.get()
                                            key=|trainer| trainer.id
                                            children=move |trainer| {
                                                let owner = if trainer.username.is_empty() {
                                                    format!("user #{}", trainer.user_id)
                                                } else {
                                                    trainer.username.clone()
                                                };
                                                let owner_trainer = trainer.clone();
                                                let delete_trainer = trainer.clone();
                                                view! {
                                                    <tr>
                                                        <td>{trainer.id}</td>
                                                        <td>{trainer.name.clone()}</td>
                                                        <td>{owner}</td>
                                                        <td>{trainer.monster_count}</td>
                                                        <td>{trainer.created_at.clone()}</td>
                                                        <td class="admin-actions-cell">
                                                            <button
                                                                class="button info sm"
                                                                title="Change Owner"
                                                                on:click=move |_| set_owner_target.set(Some(owner_trainer.clone()))
                                                            >
                                                                <i class="fas fa-user-edit"></i>
                                                            </button>
                                                            <button
                                                                class="button danger sm"
                                                                title="Delete Trainer"
                                                                on:click=move |_| {
                                                                    forfeit_to_bazar.set(true);
                                                                    set_delete_target.set(Some(delete_trainer.clone()));
                                                                }
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

            // Delete modal with the forfeit option
            {move || delete_target.get().map(|target| view! {
                <div class="admin-modal-overlay">
                    <div class="admin-modal">
                        <div class="admin-modal-header">
                            <h2>"Delete Trainer"</h2>
                        </div>
                        <div class="admin-modal-body">
                            <p>{format!("Are you sure you want to delete the trainer {}?", target.name)}</p>
                            <label class="admin-flag-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || forfeit_to_bazar.get()
                                    on:change=move |ev| forfeit_to_bazar.set(event_target_checked(&ev))
                                />
                                "Forfeit their monsters to the bazar"
                            </label>
                            <p class="admin-modal-warning">"This action cannot be undone."</p>
                        </div>
                        <div class="admin-modal-footer">
                            <button class="button secondary" on:click=move |_| set_delete_target.set(None)>
                                "Cancel"
                            </button>
                            <button class="button danger" on:click=confirm_delete disabled=move || deleting.get()>
                                {move || if deleting.get() { "Deleting..." } else { "Delete Trainer" }}
                            </button>
                        </div>
                    </div>
                </div>
            })}

            // Change-owner modal with user search
            {move || owner_target.get().map(|target| view! {
                <div class="admin-modal-overlay">
                    <div class="admin-modal">
                        <div class="admin-modal-header">
                            <h2>{format!("Change Owner of {}", target.name)}</h2>
                        </div>
                        <div class="admin-modal-body">
                            <form
                                class="admin-search-form"
                                on:submit=move |ev: web_sys::SubmitEvent| {
                                    ev.prevent_default();
                                    run_owner_search(());
                                }
                            >
                                <input
                                    type="text"
                                    class="admin-search-input"
                                    placeholder="Search users..."
                                    prop:value=move || owner_search.get()
                                    on:input=move |ev| set_owner_search.set(event_target_value(&ev))
                                />
                                <button type="submit" class="button primary" disabled=move || owner_searching.get()>
                                    {move || if owner_searching.get() { "Searching..." } else { "Search" }}
                                </button>
                            </form>

                            <ul class="admin-owner-results">
                                <For
                                    each=move || owner_results.get()
                                    key=|user| user.id
                                    children=move |user| {
                                        let pick = user.clone();
                                        view! {
                                            <li>
                                                <button
                                                    class="button secondary sm"
                                                    on:click=move |_| assign_owner(pick.clone())
                                                    disabled=move || changing_owner.get()
                                                >
                                                    {format!("{} ({})", user.username, user.email)}
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </div>
                        <div class="admin-modal-footer">
                            <button class="button secondary" on:click=move |_| set_owner_target.set(None)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

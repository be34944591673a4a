//! Monster List Page
//!
//! Paginated monster listing with franchise filter, search, and sortable
//! columns.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ListQuery, SortOrder};
use crate::components::{ConfirmModal, LoadingIndicator, Pagination, SearchBar};
use crate::context::{AdminPage, AppContext};
use crate::models::{franchise_label, Monster, FRANCHISES};

#[component]
pub fn MonsterListPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (rows, set_rows) = signal(Vec::<Monster>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (franchise, set_franchise) = signal(String::new());
    let (sort_by, set_sort_by) = signal("id".to_string());
    let (sort_order, set_sort_order) = signal(SortOrder::Desc);
    let (page, set_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (delete_target, set_delete_target) = signal::<Option<Monster>>(None);
    let (search_tick, set_search_tick) = signal(0u32);

    Effect::new(move |_| {
        let _ = search_tick.get();
        let _ = ctx.reload_trigger.get();
        let query = ListQuery {
            page: page.get(),
            search: search.get_untracked(),
            sort_by: sort_by.get(),
            sort_order: sort_order.get(),
            filters: vec![("franchise", franchise.get())],
            ..Default::default()
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_monsters(&query).await {
                Ok(result) => {
                    set_rows.set(result.rows);
                    set_total_pages.set(result.total_pages);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[MONSTERS] Failed to load list: {err}").into(),
                    );
                    set_error.set(Some("Failed to load monsters. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    // Clicking the active sort column flips direction; a new column starts
    // ascending.
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
        set_delete_target.set(None);
        spawn_local(async move {
            match api::delete_monster(target.id).await {
                Ok(()) => {
                    set_rows.update(|rows| rows.retain(|m| m.id != target.id));
                    ctx.success(format!("Monster {} deleted successfully", target.name));
                }
                Err(err) => ctx.error(format!("Failed to delete monster: {err}")),
            }
        });
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">"Monster Management"</h1>
                <p class="admin-dashboard-subtitle">"Manage monsters across every franchise"</p>
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
                <button class="button primary" on:click=move |_| ctx.navigate(AdminPage::MonsterForm(None))>
                    <i class="fas fa-plus"></i>
                    " Add New Monster"
                </button>
            </div>

            <div class="admin-filters">
                <SearchBar
                    value=search
                    set_value=set_search
                    placeholder="Search monsters..."
                    on_search=move |()| {
                        set_page.set(1);
                        set_search_tick.update(|v| *v += 1);
                    }
                />

                <div class="admin-filter-group">
                    <label for="franchiseFilter" class="admin-filter-label">"Franchise:"</label>
                    <select
                        id="franchiseFilter"
                        class="admin-filter-select"
                        prop:value=move || franchise.get()
                        on:change=move |ev| {
                            set_page.set(1);
                            set_franchise.set(event_target_value(&ev));
                        }
                    >
                        <option value="">"All Franchises"</option>
                        {FRANCHISES.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            {move || if loading.get() {
                view! { <LoadingIndicator message="Loading monsters..." /> }.into_any()
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
                                    <th>"Franchise"</th>
                                    <th class="sortable" on:click=move |_| sort_on("level")>
                                        {move || format!("Level{}", sort_marker("level"))}
                                    </th>
                                    <th>"Species"</th>
                                    <th>"Trainer"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || if rows.get().is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="7" class="text-center">"No monsters found"</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    view! {
                                        <For
                                            each=move || rows.get()
                                            key=|mon| mon.id
                                            children=move |mon| {
                                                let species = mon.species().join(" / ");
                                                let trainer = mon
                                                    .trainer_id
                                                    .map(|id| format!("#{id}"))
                                                    .unwrap_or_else(|| "Wild".to_string());
                                                let edit_id = mon.id;
                                                let delete_mon = mon.clone();
                                                view! {
                                                    <tr>
                                                        <td>{mon.id}</td>
                                                        <td>
                                                            {mon.name.clone()}
                                                            {mon.shiny.then(|| view! {
                                                                <span class="monster-flag shiny" title="Shiny">"★"</span>
                                                            })}
                                                        </td>
                                                        <td>{franchise_label(&mon.franchise).to_string()}</td>
                                                        <td>{mon.level}</td>
                                                        <td>{species}</td>
                                                        <td>{trainer}</td>
                                                        <td class="admin-actions-cell">
                                                            <button
                                                                class="button info sm"
                                                                title="Edit Monster"
                                                                on:click=move |_| ctx.navigate(
                                                                    AdminPage::MonsterForm(Some(edit_id))
                                                                )
                                                            >
                                                                <i class="fas fa-edit"></i>
                                                            </button>
                                                            <button
                                                                class="button danger sm"
                                                                title="Delete Monster"
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
                    message=format!("Are you sure you want to delete the monster {}?", target.name)
                    confirm_label="Delete Monster"
                    on_confirm=confirm_delete
                    on_cancel=move |()| set_delete_target.set(None)
                />
            })}
        </div>
    }
}

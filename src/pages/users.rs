//! User Management Page
//!
//! Account listing with role editing and deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ListQuery};
use crate::components::{ConfirmModal, LoadingIndicator, Pagination, SearchBar};
use crate::context::{AdminPage, AppContext};
use crate::models::{AdminUser, USER_ROLES};

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (rows, set_rows) = signal(Vec::<AdminUser>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (delete_target, set_delete_target) = signal::<Option<AdminUser>>(None);
    let (search_tick, set_search_tick) = signal(0u32);

    Effect::new(move |_| {
        let _ = search_tick.get();
        let _ = ctx.reload_trigger.get();
        let query = ListQuery {
            page: page.get(),
            search: search.get_untracked(),
            ..Default::default()
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_users(&query).await {
                Ok(result) => {
                    set_rows.set(result.rows);
                    set_total_pages.set(result.total_pages);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[USERS] Failed to load list: {err}").into());
                    set_error.set(Some("Failed to load users. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let change_role = move |user: AdminUser, role: String| {
        spawn_local(async move {
            match api::update_user_role(user.id, &role).await {
                Ok(updated) => {
                    set_rows.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|u| u.id == updated.id) {
                            *row = updated.clone();
                        }
                    });
                    ctx.success(format!("{} is now a {}", updated.username, updated.role));
                }
                Err(err) => ctx.error(format!("Failed to update role: {err}")),
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        set_delete_target.set(None);
        spawn_local(async move {
            match api::delete_user(target.id).await {
                Ok(()) => {
                    set_rows.update(|rows| rows.retain(|u| u.id != target.id));
                    ctx.success(format!("User {} deleted successfully", target.username));
                }
                Err(err) => ctx.error(format!("Failed to delete user: {err}")),
            }
        });
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">"User Management"</h1>
                <p class="admin-dashboard-subtitle">"Manage user accounts, permissions, and roles"</p>
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
                    placeholder="Search users..."
                    on_search=move |()| {
                        set_page.set(1);
                        set_search_tick.update(|v| *v += 1);
                    }
                />
            </div>

            {move || if loading.get() {
                view! { <LoadingIndicator message="Loading users..." /> }.into_any()
            } else {
                view! {
                    <div class="admin-table-container">
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Username"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Joined"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || if rows.get().is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="text-center">"No users found"</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    view! {
                                        <For
                                            each=move || rows.get()
                                            key=|user| user.id
                                            children=move |user| {
                                                let role_user = user.clone();
                                                let delete_user = user.clone();
                                                let current_role = user.role.clone();
                                                view! {
                                                    <tr>
                                                        <td>{user.id}</td>
                                                        <td>{user.username.clone()}</td>
                                                        <td>{user.email.clone()}</td>
                                                        <td>
                                                            <select
                                                                class="admin-form-select"
                                                                prop:value=current_role.clone()
                                                                on:change=move |ev| change_role(
                                                                    role_user.clone(),
                                                                    event_target_value(&ev),
                                                                )
                                                            >
                                                                {USER_ROLES.iter().map(|r| view! {
                                                                    <option value=*r selected={*r == current_role}>{*r}</option>
                                                                }).collect_view()}
                                                            </select>
                                                        </td>
                                                        <td>{user.created_at.clone()}</td>
                                                        <td class="admin-actions-cell">
                                                            <button
                                                                class="button danger sm"
                                                                title="Delete User"
                                                                on:click=move |_| set_delete_target.set(Some(delete_user.clone()))
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
                    message=format!("Are you sure you want to delete the user {}?", target.username)
                    confirm_label="Delete User"
                    on_confirm=confirm_delete
                    on_cancel=move |()| set_delete_target.set(None)
                />
            })}
        </div>
    }
}

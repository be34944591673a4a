//! Item Management Page
//!
//! Item table with category filter, inline create/edit form, and a bulk
//! CSV import panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ListQuery};
use crate::bulk::parse_item_lines;
use crate::components::{ConfirmModal, LoadingIndicator, Pagination, SearchBar};
use crate::context::{AdminPage, AppContext};
use crate::models::{category_label, Item, ITEM_CATEGORIES};

const RARITIES: &[&str] = &["common", "uncommon", "rare", "legendary"];

#[component]
pub fn ItemManagementPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (rows, set_rows) = signal(Vec::<Item>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (delete_target, set_delete_target) = signal::<Option<Item>>(None);
    let (search_tick, set_search_tick) = signal(0u32);

    // Inline editor: None hidden, Some(None) creating, Some(Some(id)) editing.
    let (editing, set_editing) = signal::<Option<Option<u32>>>(None);
    let (saving, set_saving) = signal(false);
    let form_name = RwSignal::new(String::new());
    let form_description = RwSignal::new(String::new());
    let form_category = RwSignal::new("items".to_string());
    let form_effect = RwSignal::new(String::new());
    let form_rarity = RwSignal::new("common".to_string());
    let form_price = RwSignal::new(0u32);
    let form_image_url = RwSignal::new(String::new());

    // Bulk import
    let (bulk_text, set_bulk_text) = signal(String::new());
    let (importing, set_importing) = signal(false);

    Effect::new(move |_| {
        let _ = search_tick.get();
        let _ = ctx.reload_trigger.get();
        let query = ListQuery {
            page: page.get(),
            search: search.get_untracked(),
            filters: vec![("category", category.get())],
            ..Default::default()
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_items(&query).await {
                Ok(result) => {
                    set_rows.set(result.rows);
                    set_total_pages.set(result.total_pages);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] Failed to load list: {err}").into());
                    set_error.set(Some("Failed to load items. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let open_create = move |_| {
        form_name.set(String::new());
        form_description.set(String::new());
        form_category.set("items".to_string());
        form_effect.set(String::new());
        form_rarity.set("common".to_string());
        form_price.set(0);
        form_image_url.set(String::new());
        set_editing.set(Some(None));
    };

    let open_edit = move |item: Item| {
        form_name.set(item.name);
        form_description.set(item.description);
        form_category.set(item.category);
        form_effect.set(item.effect);
        form_rarity.set(item.rarity);
        form_price.set(item.base_price);
        form_image_url.set(item.image_url);
        set_editing.set(Some(Some(item.id)));
    };

    let save_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form_name.get_untracked().is_empty() {
            set_error.set(Some("Item name is required".to_string()));
            return;
        }
        let Some(target) = editing.get_untracked() else {
            return;
        };
        let item = Item {
            id: target.unwrap_or(0),
            name: form_name.get_untracked(),
            description: form_description.get_untracked(),
            category: form_category.get_untracked(),
            effect: form_effect.get_untracked(),
            rarity: form_rarity.get_untracked(),
            base_price: form_price.get_untracked(),
            image_url: form_image_url.get_untracked(),
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = match target {
                Some(item_id) => api::update_item(item_id, &item).await,
                None => api::create_item(&item).await,
            };
            match result {
                Ok(saved) => {
                    let verb = if target.is_some() { "updated" } else { "created" };
                    ctx.success(format!("Item {} {verb} successfully", saved.name));
                    set_editing.set(None);
                    ctx.reload();
                }
                Err(err) => set_error.set(Some(format!("Failed to save item: {err}"))),
            }
            set_saving.set(false);
        });
    };

    let run_import = move |_| {
        let items = parse_item_lines(&bulk_text.get_untracked());
        if items.is_empty() {
            set_error.set(Some("Nothing to import: no valid lines found".to_string()));
            return;
        }
        set_importing.set(true);
        spawn_local(async move {
            match api::bulk_create_items(&items).await {
                Ok(count) => {
                    ctx.success(format!("Imported {count} items successfully"));
                    set_bulk_text.set(String::new());
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] Bulk import failed: {err}").into());
                    set_error.set(Some(format!("Bulk import failed: {err}")));
                }
            }
            set_importing.set(false);
        });
    };

    let confirm_delete = move |_| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        set_delete_target.set(None);
        spawn_local(async move {
            match api::delete_item(target.id).await {
                Ok(()) => {
                    set_rows.update(|rows| rows.retain(|i| i.id != target.id));
                    ctx.success(format!("Item {} deleted successfully", target.name));
                }
                Err(err) => ctx.error(format!("Failed to delete item: {err}")),
            }
        });
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">"Item Management"</h1>
                <p class="admin-dashboard-subtitle">"Manage items and bulk-import new ones"</p>
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
                <button class="button primary" on:click=open_create>
                    <i class="fas fa-plus"></i>
                    " Add New Item"
                </button>
            </div>

            <div class="admin-filters">
                <SearchBar
                    value=search
                    set_value=set_search
                    placeholder="Search items..."
                    on_search=move |()| {
                        set_page.set(1);
                        set_search_tick.update(|v| *v += 1);
                    }
                />

                <div class="admin-filter-group">
                    <label for="categoryFilter" class="admin-filter-label">"Category:"</label>
                    <select
                        id="categoryFilter"
                        class="admin-filter-select"
                        prop:value=move || category.get()
                        on:change=move |ev| {
                            set_page.set(1);
                            set_category.set(event_target_value(&ev));
                        }
                    >
                        <option value="">"All Categories"</option>
                        {ITEM_CATEGORIES.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            // Inline create/edit form
            {move || editing.get().map(|target| view! {
                <form class="admin-form admin-inline-form" on:submit=save_item>
                    <h2 class="admin-form-section-title">
                        {if target.is_some() { "Edit Item" } else { "New Item" }}
                    </h2>
                    <div class="admin-form-grid">
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Name" <span class="required">" *"</span></label>
                            <input
                                type="text"
                                class="admin-form-input"
                                prop:value=move || form_name.get()
                                on:input=move |ev| form_name.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            />
                        </div>
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Category"</label>
                            <select
                                class="admin-form-select"
                                prop:value=move || form_category.get()
                                on:change=move |ev| form_category.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            >
                                {ITEM_CATEGORIES.iter().map(|(value, label)| view! {
                                    <option value=*value>{*label}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Effect"</label>
                            <input
                                type="text"
                                class="admin-form-input"
                                prop:value=move || form_effect.get()
                                on:input=move |ev| form_effect.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            />
                        </div>
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Rarity"</label>
                            <select
                                class="admin-form-select"
                                prop:value=move || form_rarity.get()
                                on:change=move |ev| form_rarity.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            >
                                {RARITIES.iter().map(|r| view! { <option value=*r>{*r}</option> }).collect_view()}
                            </select>
                        </div>
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Base Price"</label>
                            <input
                                type="number"
                                class="admin-form-input"
                                min="0"
                                prop:value=move || form_price.get().to_string()
                                on:input=move |ev| form_price.set(event_target_value(&ev).parse().unwrap_or(0))
                                disabled=move || saving.get()
                            />
                        </div>
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Image URL"</label>
                            <input
                                type="text"
                                class="admin-form-input"
                                prop:value=move || form_image_url.get()
                                on:input=move |ev| form_image_url.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            />
                        </div>
                    </div>
                    <div class="admin-form-group">
                        <label class="admin-form-label">"Description"</label>
                        <textarea
                            class="admin-form-textarea"
                            rows="2"
                            prop:value=move || form_description.get()
                            on:input=move |ev| form_description.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        ></textarea>
                    </div>
                    <div class="admin-form-actions">
                        <button type="button" class="button secondary" on:click=move |_| set_editing.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="button primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Item" }}
                        </button>
                    </div>
                </form>
            })}

            {move || if loading.get() {
                view! { <LoadingIndicator message="Loading items..." /> }.into_any()
            } else {
                view! {
                    <div class="admin-table-container">
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Category"</th>
                                    <th>"Rarity"</th>
                                    <th>"Effect"</th>
                                    <th>"Price"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || if rows.get().is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="text-center">"No items found"</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    view! {
                                        <For
                                            each=move || rows.get()
                                            key=|item| item.id
                                            children=move |item| {
                                                let edit_item = item.clone();
                                                let delete_item = item.clone();
                                                view! {
                                                    <tr>
                                                        <td>{item.name.clone()}</td>
                                                        <td>{category_label(&item.category).to_string()}</td>
                                                        <td>{item.rarity.clone()}</td>
                                                        <td>{item.effect.clone()}</td>
                                                        <td>{item.base_price}</td>
                                                        <td class="admin-actions-cell">
                                                            <button
                                                                class="button info sm"
                                                                title="Edit Item"
                                                                on:click=move |_| open_edit(edit_item.clone())
                                                            >
                                                                <i class="fas fa-edit"></i>
                                                            </button>
                                                            <button
                                                                class="button danger sm"
                                                                title="Delete Item"
                                                                on:click=move |_| set_delete_target.set(Some(delete_item.clone()))
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

            <div class="admin-form-section admin-bulk-import">
                <h2 class="admin-form-section-title">"Bulk Import"</h2>
                <p class="admin-form-hint">
                    "One item per line: name,description,category,effect,rarity,base_price,image_url"
                </p>
                <textarea
                    class="admin-form-textarea"
                    rows="6"
                    placeholder="Potion,A basic potion,medicine,heal,common,10,http://..."
                    prop:value=move || bulk_text.get()
                    on:input=move |ev| set_bulk_text.set(event_target_value(&ev))
                    disabled=move || importing.get()
                ></textarea>
                <div class="admin-form-actions">
                    <span class="admin-form-hint">
                        {move || {
                            let count = parse_item_lines(&bulk_text.get()).len();
                            format!("{count} items ready to import")
                        }}
                    </span>
                    <button class="button primary" on:click=run_import disabled=move || importing.get()>
                        {move || if importing.get() { "Importing..." } else { "Import Items" }}
                    </button>
                </div>
            </div>

            {move || delete_target.get().map(|target| view! {
                <ConfirmModal
                    title="Confirm Deletion"
                    message=format!("Are you sure you want to delete the item {}?", target.name)
                    confirm_label="Delete Item"
                    on_confirm=confirm_delete
                    on_cancel=move |()| set_delete_target.set(None)
                />
            })}
        </div>
    }
}

//! Shop Manager Page
//!
//! Two tabs: shop definitions (with visibility scheduling) and per-shop
//! inventory with restocking.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RestockArgs};
use crate::components::{ConfirmModal, LoadingIndicator};
use crate::context::{AdminPage, AppContext};
use crate::models::{category_label, Shop, ShopItem, VisibilityCondition, DAY_NAMES, ITEM_CATEGORIES};

#[component]
pub fn ShopManagerPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (active_tab, set_active_tab) = signal("shops".to_string());

    // ── Shops state ─────────────────────────────────────────────────
    let (shops, set_shops) = signal(Vec::<Shop>::new());
    let (shops_loading, set_shops_loading) = signal(true);
    let (filter_category, set_filter_category) = signal(String::new());
    let (delete_target, set_delete_target) = signal::<Option<Shop>>(None);

    // Shop editor: None hidden, Some(None) creating, Some(Some(shop_id)) editing.
    let (editing, set_editing) = signal::<Option<Option<String>>>(None);
    let (saving, set_saving) = signal(false);
    let form_shop_id = RwSignal::new(String::new());
    let form_name = RwSignal::new(String::new());
    let form_description = RwSignal::new(String::new());
    let form_flavor_text = RwSignal::new(String::new());
    let form_banner_image = RwSignal::new(String::new());
    let form_category = RwSignal::new(String::new());
    let form_price_modifier = RwSignal::new(1.0f64);
    let form_is_constant = RwSignal::new(true);
    let form_is_active = RwSignal::new(true);
    let form_days = RwSignal::new([false; 7]);
    let form_start_date = RwSignal::new(String::new());
    let form_end_date = RwSignal::new(String::new());
    let form_random_chance = RwSignal::new(0u8);
    let form_manually_enabled = RwSignal::new(true);

    // ── Inventory state ─────────────────────────────────────────────
    let (selected_shop, set_selected_shop) = signal(String::new());
    let (shop_items, set_shop_items) = signal(Vec::<ShopItem>::new());
    let (items_loading, set_items_loading) = signal(false);
    let stock_category = RwSignal::new("items".to_string());
    let stock_count = RwSignal::new(10u32);
    let stock_modifier = RwSignal::new(1.0f64);
    let (stocking, set_stocking) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_shops_loading.set(true);
        spawn_local(async move {
            match api::list_shops().await {
                Ok(loaded) => set_shops.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(&format!("[SHOPS] Failed to load shops: {err}").into());
                    ctx.error("Failed to load shops");
                }
            }
            set_shops_loading.set(false);
        });
    });

    // Reload inventory whenever the selected shop changes.
    Effect::new(move |_| {
        let shop_id = selected_shop.get();
        if shop_id.is_empty() {
            set_shop_items.set(Vec::new());
            return;
        }
        set_items_loading.set(true);
        spawn_local(async move {
            match api::list_shop_items(&shop_id).await {
                Ok(loaded) => set_shop_items.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[SHOPS] Failed to load inventory: {err}").into(),
                    );
                    ctx.error("Failed to load shop inventory");
                }
            }
            set_items_loading.set(false);
        });
    });

    let open_create = move |_| {
        form_shop_id.set(String::new());
        form_name.set(String::new());
        form_description.set(String::new());
        form_flavor_text.set(String::new());
        form_banner_image.set(String::new());
        form_category.set(String::new());
        form_price_modifier.set(1.0);
        form_is_constant.set(true);
        form_is_active.set(true);
        form_days.set([false; 7]);
        form_start_date.set(String::new());
        form_end_date.set(String::new());
        form_random_chance.set(0);
        form_manually_enabled.set(true);
        set_editing.set(Some(None));
    };

    let open_edit = move |shop: Shop| {
        form_shop_id.set(shop.shop_id.clone());
        form_name.set(shop.name);
        form_description.set(shop.description);
        form_flavor_text.set(shop.flavor_text);
        form_banner_image.set(shop.banner_image);
        form_category.set(shop.category.unwrap_or_default());
        form_price_modifier.set(shop.price_modifier);
        form_is_constant.set(shop.is_constant);
        form_is_active.set(shop.is_active);
        let mut days = [false; 7];
        for day in &shop.visibility.days_of_week {
            if let Some(slot) = days.get_mut(*day as usize) {
                *slot = true;
            }
        }
        form_days.set(days);
        form_start_date.set(shop.visibility.start_date);
        form_end_date.set(shop.visibility.end_date);
        form_random_chance.set(shop.visibility.random_chance);
        form_manually_enabled.set(shop.visibility.manually_enabled);
        set_editing.set(Some(Some(shop.shop_id)));
    };

    let save_shop = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form_shop_id.get_untracked().is_empty() || form_name.get_untracked().is_empty() {
            ctx.error("Shop ID and name are required");
            return;
        }
        let Some(target) = editing.get_untracked() else {
            return;
        };
        let category = form_category.get_untracked();
        let shop = Shop {
            shop_id: form_shop_id.get_untracked(),
            name: form_name.get_untracked(),
            description: form_description.get_untracked(),
            flavor_text: form_flavor_text.get_untracked(),
            banner_image: form_banner_image.get_untracked(),
            category: (!category.is_empty()).then_some(category),
            price_modifier: form_price_modifier.get_untracked(),
            is_constant: form_is_constant.get_untracked(),
            is_active: form_is_active.get_untracked(),
            visibility: VisibilityCondition {
                days_of_week: form_days
                    .get_untracked()
                    .iter()
                    .enumerate()
                    .filter_map(|(i, on)| on.then_some(i as u8))
                    .collect(),
                start_date: form_start_date.get_untracked(),
                end_date: form_end_date.get_untracked(),
                random_chance: form_random_chance.get_untracked(),
                manually_enabled: form_manually_enabled.get_untracked(),
            },
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = match target {
                Some(ref shop_id) => api::update_shop(shop_id, &shop).await,
                None => api::create_shop(&shop).await,
            };
            match result {
                Ok(saved) => {
                    let verb = if target.is_some() { "updated" } else { "created" };
                    ctx.success(format!("Shop {} {verb} successfully", saved.name));
                    set_editing.set(None);
                    ctx.reload();
                }
                Err(err) => ctx.error(format!("Failed to save shop: {err}")),
            }
            set_saving.set(false);
        });
    };

    let confirm_delete = move |_| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        set_delete_target.set(None);
        spawn_local(async move {
            match api::delete_shop(&target.shop_id).await {
                Ok(()) => {
                    set_shops.update(|shops| shops.retain(|s| s.shop_id != target.shop_id));
                    ctx.success(format!("Shop {} deleted successfully", target.name));
                }
                Err(err) => ctx.error(format!("Failed to delete shop: {err}")),
            }
        });
    };

    let run_restock = move |_| {
        let shop_id = selected_shop.get_untracked();
        if shop_id.is_empty() {
            return;
        }
        let args = RestockArgs {
            category: stock_category.get_untracked(),
            count: stock_count.get_untracked(),
            price_modifier: stock_modifier.get_untracked(),
        };
        set_stocking.set(true);
        spawn_local(async move {
            match api::restock_shop(&shop_id, &args).await {
                Ok(count) => {
                    ctx.success(format!("Stocked {count} items"));
                    match api::list_shop_items(&shop_id).await {
                        Ok(loaded) => set_shop_items.set(loaded),
                        Err(err) => web_sys::console::error_1(
                            &format!("[SHOPS] Refetch after restock failed: {err}").into(),
                        ),
                    }
                }
                Err(err) => ctx.error(format!("Failed to restock shop: {err}")),
            }
            set_stocking.set(false);
        });
    };

    let remove_item = move |row: ShopItem| {
        spawn_local(async move {
            match api::remove_shop_item(&row.shop_id, row.id).await {
                Ok(()) => set_shop_items.update(|rows| rows.retain(|r| r.id != row.id)),
                Err(err) => ctx.error(format!("Failed to remove item: {err}")),
            }
        });
    };

    let tab_class = move |tab: &str| {
        if active_tab.get() == tab {
            "admin-tab active"
        } else {
            "admin-tab"
        }
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">"Shop Manager"</h1>
                <p class="admin-dashboard-subtitle">"Manage shops, visibility, and inventory stock"</p>
            </div>

            <div class="admin-actions">
                <button class="button secondary" on:click=move |_| ctx.navigate(AdminPage::Dashboard)>
                    <i class="fas fa-arrow-left"></i>
                    " Back to Dashboard"
                </button>
            </div>

            <div class="admin-tab-bar">
                <button class=move || tab_class("shops") on:click=move |_| set_active_tab.set("shops".to_string())>
                    "Shops"
                </button>
                <button class=move || tab_class("inventory") on:click=move |_| set_active_tab.set("inventory".to_string())>
                    "Inventory"
                </button>
            </div>

            // ── Shops tab ───────────────────────────────────────────
            <Show when=move || active_tab.get() == "shops">
                <div class="admin-actions">
                    <button class="button primary" on:click=open_create>
                        <i class="fas fa-plus"></i>
                        " Add New Shop"
                    </button>
                    <select
                        class="admin-filter-select"
                        prop:value=move || filter_category.get()
                        on:change=move |ev| set_filter_category.set(event_target_value(&ev))
                    >
                        <option value="">"All Categories"</option>
                        {ITEM_CATEGORIES.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>

                {move || editing.get().map(|target| {
                    let is_existing = target.is_some();
                    view! {
                    <form class="admin-form admin-inline-form" on:submit=save_shop>
                        <h2 class="admin-form-section-title">
                            {if is_existing { "Edit Shop" } else { "New Shop" }}
                        </h2>
                        <div class="admin-form-grid">
                            <div class="admin-form-group">
                                <label class="admin-form-label">"Shop ID" <span class="required">" *"</span></label>
                                <input
                                    type="text"
                                    class="admin-form-input"
                                    placeholder="e.g., mega-mart"
                                    prop:value=move || form_shop_id.get()
                                    on:input=move |ev| form_shop_id.set(event_target_value(&ev))
                                    disabled=move || saving.get() || is_existing
                                />
                            </div>
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
                                    <option value="">"All Items"</option>
                                    {ITEM_CATEGORIES.iter().map(|(value, label)| view! {
                                        <option value=*value>{*label}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="admin-form-group">
                                <label class="admin-form-label">"Price Modifier"</label>
                                <input
                                    type="number"
                                    class="admin-form-input"
                                    step="0.05"
                                    min="0"
                                    prop:value=move || format!("{:.2}", form_price_modifier.get())
                                    on:input=move |ev| form_price_modifier.set(
                                        event_target_value(&ev).parse().unwrap_or(1.0)
                                    )
                                    disabled=move || saving.get()
                                />
                            </div>
                            <div class="admin-form-group">
                                <label class="admin-form-label">"Banner Image"</label>
                                <input
                                    type="text"
                                    class="admin-form-input"
                                    prop:value=move || form_banner_image.get()
                                    on:input=move |ev| form_banner_image.set(event_target_value(&ev))
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
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Flavor Text"</label>
                            <textarea
                                class="admin-form-textarea"
                                rows="2"
                                prop:value=move || form_flavor_text.get()
                                on:input=move |ev| form_flavor_text.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            ></textarea>
                        </div>

                        <div class="admin-flag-row">
                            <label class="admin-flag-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form_is_constant.get()
                                    on:change=move |ev| form_is_constant.set(event_target_checked(&ev))
                                />
                                "Always open"
                            </label>
                            <label class="admin-flag-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form_is_active.get()
                                    on:change=move |ev| form_is_active.set(event_target_checked(&ev))
                                />
                                "Active"
                            </label>
                        </div>

                        // Scheduling only matters for non-constant shops.
                        <Show when=move || !form_is_constant.get()>
                            <div class="admin-form-section">
                                <h3 class="admin-form-section-title">"Visibility"</h3>
                                <div class="admin-flag-row">
                                    {DAY_NAMES.iter().enumerate().map(|(i, day)| {
                                        view! {
                                            <label class="admin-flag-option">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || form_days.get()[i]
                                                    on:change=move |_| form_days.update(|d| d[i] = !d[i])
                                                />
                                                {*day}
                                            </label>
                                        }
                                    }).collect_view()}
                                </div>
                                <div class="admin-form-grid">
                                    <div class="admin-form-group">
                                        <label class="admin-form-label">"Start Date"</label>
                                        <input
                                            type="date"
                                            class="admin-form-input"
                                            prop:value=move || form_start_date.get()
                                            on:input=move |ev| form_start_date.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="admin-form-group">
                                        <label class="admin-form-label">"End Date"</label>
                                        <input
                                            type="date"
                                            class="admin-form-input"
                                            prop:value=move || form_end_date.get()
                                            on:input=move |ev| form_end_date.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="admin-form-group">
                                        <label class="admin-form-label">"Random Chance (%)"</label>
                                        <input
                                            type="number"
                                            class="admin-form-input"
                                            min="0"
                                            max="100"
                                            prop:value=move || form_random_chance.get().to_string()
                                            on:input=move |ev| form_random_chance.set(
                                                event_target_value(&ev).parse().unwrap_or(0)
                                            )
                                        />
                                    </div>
                                </div>
                                <label class="admin-flag-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form_manually_enabled.get()
                                        on:change=move |ev| form_manually_enabled.set(event_target_checked(&ev))
                                    />
                                    "Manually enabled"
                                </label>
                            </div>
                        </Show>

                        <div class="admin-form-actions">
                            <button type="button" class="button secondary" on:click=move |_| set_editing.set(None)>
                                "Cancel"
                            </button>
                            <button type="submit" class="button primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Shop" }}
                            </button>
                        </div>
                    </form>
                }})}

                {move || if shops_loading.get() {
                    view! { <LoadingIndicator message="Loading shops..." /> }.into_any()
                } else {
                    view! {
                        <div class="admin-table-container">
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Shop"</th>
                                        <th>"Category"</th>
                                        <th>"Price Mod"</th>
                                        <th>"Schedule"</th>
                                        <th>"Status"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || {
                                            let filter = filter_category.get();
                                            shops
                                                .get()
                                                .into_iter()
                                                .filter(|shop| {
                                                    filter.is_empty()
                                                        || shop.category.as_deref() == Some(filter.as_str())
                                                })
                                                .collect::<Vec<_>>()
                                        }
                                        key=|shop| shop.shop_id.clone()
                                        children=move |shop| {
                                            let category = shop
                                                .category
                                                .as_deref()
                                                .map(|c| category_label(c).to_string())
                                                .unwrap_or_else(|| "All Items".to_string());
                                            let schedule = if shop.is_constant {
                                                "Always".to_string()
                                            } else if shop.visibility.days_of_week.is_empty() {
                                                "Any day".to_string()
                                            } else {
                                                shop.visibility
                                                    .days_of_week
                                                    .iter()
                                                    .filter_map(|d| DAY_NAMES.get(*d as usize))
                                                    .copied()
                                                    .collect::<Vec<_>>()
                                                    .join(", ")
                                            };
                                            let status = if shop.is_active { "Active" } else { "Inactive" };
                                            let edit_shop = shop.clone();
                                            let delete_shop = shop.clone();
                                            view! {
                                                <tr>
                                                    <td>{shop.name.clone()}</td>
                                                    <td>{category}</td>
                                                    <td>{format!("×{:.2}", shop.price_modifier)}</td>
                                                    <td>{schedule}</td>
                                                    <td>{status}</td>
                                                    <td class="admin-actions-cell">
                                                        <button
                                                            class="button info sm"
                                                            title="Edit Shop"
                                                            on:click=move |_| open_edit(edit_shop.clone())
                                                        >
                                                            <i class="fas fa-edit"></i>
                                                        </button>
                                                        <button
                                                            class="button danger sm"
                                                            title="Delete Shop"
                                                            on:click=move |_| set_delete_target.set(Some(delete_shop.clone()))
                                                        >
                                                            <i class="fas fa-trash-alt"></i>
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }}
            </Show>

            // ── Inventory tab ───────────────────────────────────────
            <Show when=move || active_tab.get() == "inventory">
                <div class="admin-filters">
                    <div class="admin-filter-group">
                        <label class="admin-filter-label">"Shop:"</label>
                        <select
                            class="admin-filter-select"
                            prop:value=move || selected_shop.get()
                            on:change=move |ev| set_selected_shop.set(event_target_value(&ev))
                        >
                            <option value="">"Select a shop"</option>
                            <For
                                each=move || shops.get()
                                key=|shop| shop.shop_id.clone()
                                children=move |shop| {
                                    let id = shop.shop_id.clone();
                                    view! { <option value=id>{shop.name.clone()}</option> }
                                }
                            />
                        </select>
                    </div>
                </div>

                <Show when=move || !selected_shop.get().is_empty()>
                    <div class="admin-restock-form">
                        <select
                            class="admin-filter-select"
                            prop:value=move || stock_category.get()
                            on:change=move |ev| stock_category.set(event_target_value(&ev))
                        >
                            {ITEM_CATEGORIES.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>
                        <input
                            type="number"
                            class="admin-form-input"
                            min="1"
                            max="50"
                            prop:value=move || stock_count.get().to_string()
                            on:input=move |ev| stock_count.set(event_target_value(&ev).parse().unwrap_or(10))
                        />
                        <input
                            type="number"
                            class="admin-form-input"
                            step="0.05"
                            min="0"
                            prop:value=move || format!("{:.2}", stock_modifier.get())
                            on:input=move |ev| stock_modifier.set(event_target_value(&ev).parse().unwrap_or(1.0))
                        />
                        <button class="button primary" on:click=run_restock disabled=move || stocking.get()>
                            {move || if stocking.get() { "Stocking..." } else { "Restock" }}
                        </button>
                    </div>

                    {move || if items_loading.get() {
                        view! { <LoadingIndicator message="Loading inventory..." /> }.into_any()
                    } else {
                        view! {
                            <div class="admin-table-container">
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"Item"</th>
                                            <th>"Category"</th>
                                            <th>"Price"</th>
                                            <th>"Stock"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || if shop_items.get().is_empty() {
                                            view! {
                                                <tr>
                                                    <td colspan="5" class="text-center">"No items stocked"</td>
                                                </tr>
                                            }.into_any()
                                        } else {
                                            view! {
                                                <For
                                                    each=move || shop_items.get()
                                                    key=|row| row.id
                                                    children=move |row| {
                                                        let remove_row = row.clone();
                                                        view! {
                                                            <tr>
                                                                <td>{row.item_name.clone()}</td>
                                                                <td>{category_label(&row.category).to_string()}</td>
                                                                <td>{row.price}</td>
                                                                <td>{row.stock}</td>
                                                                <td class="admin-actions-cell">
                                                                    <button
                                                                        class="button danger sm"
                                                                        title="Remove from shop"
                                                                        on:click=move |_| remove_item(remove_row.clone())
                                                                    >
                                                                        <i class="fas fa-times"></i>
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
                </Show>
            </Show>

            {move || delete_target.get().map(|target| view! {
                <ConfirmModal
                    title="Confirm Deletion"
                    message=format!("Are you sure you want to delete the shop {}?", target.name)
                    confirm_label="Delete Shop"
                    on_confirm=confirm_delete
                    on_cancel=move |()| set_delete_target.set(None)
                />
            })}
        </div>
    }
}

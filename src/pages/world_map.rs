//! World Map Admin Page
//!
//! Three-level geography editor: landmasses, their regions, and each
//! region's areas.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ConfirmModal, LoadingIndicator};
use crate::context::{AdminPage, AppContext};
use crate::models::{Area, Landmass, Region};

/// Which row a pending delete refers to.
#[derive(Clone, PartialEq)]
enum DeleteTarget {
    Landmass(Landmass),
    Region(Region),
    Area(Area),
}

fn join_types(types: &[String]) -> String {
    types.join(", ")
}

fn split_types(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn WorldMapPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (landmasses, set_landmasses) = signal(Vec::<Landmass>::new());
    let (regions, set_regions) = signal(Vec::<Region>::new());
    let (areas, set_areas) = signal(Vec::<Area>::new());
    let (loading, set_loading) = signal(true);
    let (selected_landmass, set_selected_landmass) = signal(String::new());
    let (selected_region, set_selected_region) = signal(String::new());
    let (delete_target, set_delete_target) = signal::<Option<DeleteTarget>>(None);

    // One shared editor panel; `editor_level` decides which level it edits
    // and `editor_id` whether it creates (None) or updates.
    let (editor_level, set_editor_level) = signal::<Option<&'static str>>(None);
    let (editor_id, set_editor_id) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let form_id = RwSignal::new(String::new());
    let form_name = RwSignal::new(String::new());
    let form_image = RwSignal::new(String::new());
    let form_description = RwSignal::new(String::new());
    let form_climate = RwSignal::new(String::new());
    let form_elevation = RwSignal::new(String::new());
    let form_types = RwSignal::new(String::new());
    let form_lore = RwSignal::new(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_landmasses().await {
                Ok(loaded) => set_landmasses.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WORLD] Failed to load landmasses: {err}").into(),
                    );
                    ctx.error("Failed to load world map data");
                }
            }
            set_loading.set(false);
        });
    });

    // Child lists follow the selection chain.
    Effect::new(move |_| {
        let landmass_id = selected_landmass.get();
        set_selected_region.set(String::new());
        set_areas.set(Vec::new());
        if landmass_id.is_empty() {
            set_regions.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::list_regions(&landmass_id).await {
                Ok(loaded) => set_regions.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WORLD] Failed to load regions: {err}").into(),
                    );
                    ctx.error("Failed to load regions");
                }
            }
        });
    });

    Effect::new(move |_| {
        let region_id = selected_region.get();
        if region_id.is_empty() {
            set_areas.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::list_areas(&region_id).await {
                Ok(loaded) => set_areas.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WORLD] Failed to load areas: {err}").into(),
                    );
                    ctx.error("Failed to load areas");
                }
            }
        });
    });

    let clear_form = move || {
        form_id.set(String::new());
        form_name.set(String::new());
        form_image.set(String::new());
        form_description.set(String::new());
        form_climate.set(String::new());
        form_elevation.set(String::new());
        form_types.set(String::new());
        form_lore.set(String::new());
    };

    let open_create = move |level: &'static str| {
        clear_form();
        set_editor_id.set(None);
        set_editor_level.set(Some(level));
    };

    let open_edit_landmass = move |landmass: Landmass| {
        form_id.set(landmass.id.clone());
        form_name.set(landmass.name);
        form_image.set(landmass.image);
        form_description.set(landmass.description);
        form_climate.set(landmass.climate);
        form_elevation.set(String::new());
        form_types.set(join_types(&landmass.dominant_types));
        form_lore.set(landmass.lore);
        set_editor_id.set(Some(landmass.id));
        set_editor_level.set(Some("landmass"));
    };

    let open_edit_region = move |region: Region| {
        form_id.set(region.id.clone());
        form_name.set(region.name);
        form_image.set(region.image);
        form_description.set(region.description);
        form_climate.set(region.climate);
        form_elevation.set(region.elevation);
        form_types.set(join_types(&region.dominant_types));
        form_lore.set(String::new());
        set_editor_id.set(Some(region.id));
        set_editor_level.set(Some("region"));
    };

    let open_edit_area = move |area: Area| {
        form_id.set(area.id.clone());
        form_name.set(area.name);
        form_image.set(area.image);
        form_description.set(area.description);
        form_climate.set(String::new());
        form_elevation.set(String::new());
        form_types.set(String::new());
        form_lore.set(String::new());
        set_editor_id.set(Some(area.id));
        set_editor_level.set(Some("area"));
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(level) = editor_level.get_untracked() else {
            return;
        };
        if form_id.get_untracked().is_empty() || form_name.get_untracked().is_empty() {
            ctx.error("ID and name are required");
            return;
        }
        let existing = editor_id.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = match level {
                "landmass" => {
                    let landmass = Landmass {
                        id: form_id.get_untracked(),
                        name: form_name.get_untracked(),
                        image: form_image.get_untracked(),
                        description: form_description.get_untracked(),
                        climate: form_climate.get_untracked(),
                        dominant_types: split_types(&form_types.get_untracked()),
                        lore: form_lore.get_untracked(),
                    };
                    match existing {
                        Some(id) => api::update_landmass(&id, &landmass).await.map(|_| ()),
                        None => api::create_landmass(&landmass).await.map(|_| ()),
                    }
                }
                "region" => {
                    let region = Region {
                        id: form_id.get_untracked(),
                        name: form_name.get_untracked(),
                        landmass_id: selected_landmass.get_untracked(),
                        image: form_image.get_untracked(),
                        description: form_description.get_untracked(),
                        climate: form_climate.get_untracked(),
                        elevation: form_elevation.get_untracked(),
                        dominant_types: split_types(&form_types.get_untracked()),
                    };
                    match existing {
                        Some(id) => api::update_region(&id, &region).await.map(|_| ()),
                        None => api::create_region(&region).await.map(|_| ()),
                    }
                }
                _ => {
                    let area = Area {
                        id: form_id.get_untracked(),
                        name: form_name.get_untracked(),
                        region_id: selected_region.get_untracked(),
                        image: form_image.get_untracked(),
                        description: form_description.get_untracked(),
                    };
                    match existing {
                        Some(id) => api::update_area(&id, &area).await.map(|_| ()),
                        None => api::create_area(&area).await.map(|_| ()),
                    }
                }
            };
            match result {
                Ok(()) => {
                    ctx.success(format!("Saved {} successfully", form_name.get_untracked()));
                    set_editor_level.set(None);
                    ctx.reload();
                }
                Err(err) => ctx.error(format!("Failed to save: {err}")),
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
            let result = match &target {
                DeleteTarget::Landmass(landmass) => api::delete_landmass(&landmass.id).await,
                DeleteTarget::Region(region) => api::delete_region(&region.id).await,
                DeleteTarget::Area(area) => api::delete_area(&area.id).await,
            };
            match result {
                Ok(()) => {
                    match target {
                        DeleteTarget::Landmass(landmass) => {
                            set_landmasses.update(|rows| rows.retain(|l| l.id != landmass.id));
                            ctx.success(format!("Landmass {} deleted", landmass.name));
                        }
                        DeleteTarget::Region(region) => {
                            set_regions.update(|rows| rows.retain(|r| r.id != region.id));
                            ctx.success(format!("Region {} deleted", region.name));
                        }
                        DeleteTarget::Area(area) => {
                            set_areas.update(|rows| rows.retain(|a| a.id != area.id));
                            ctx.success(format!("Area {} deleted", area.name));
                        }
                    }
                }
                Err(err) => ctx.error(format!("Failed to delete: {err}")),
            }
        });
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">"World Map Editor"</h1>
                <p class="admin-dashboard-subtitle">
                    "Manage landmasses, regions, and areas in the world map"
                </p>
            </div>

            <div class="admin-actions">
                <button class="button secondary" on:click=move |_| ctx.navigate(AdminPage::Dashboard)>
                    <i class="fas fa-arrow-left"></i>
                    " Back to Dashboard"
                </button>
            </div>

            {move || if loading.get() {
                view! { <LoadingIndicator message="Loading world map..." /> }.into_any()
            } else {
                view! {
                    <div class="admin-world-columns">
                        // ── Landmasses ──────────────────────────────
                        <div class="admin-world-column">
                            <div class="admin-world-column-header">
                                <h2>"Landmasses"</h2>
                                <button class="button primary sm" on:click=move |_| open_create("landmass")>
                                    <i class="fas fa-plus"></i>
                                </button>
                            </div>
                            <ul class="admin-world-list">
                                <For
                                    each=move || landmasses.get()
                                    key=|landmass| landmass.id.clone()
                                    children=move |landmass| {
                                        let id = landmass.id.clone();
                                        let select_id = id.clone();
                                        let edit_landmass = landmass.clone();
                                        let delete_landmass = landmass.clone();
                                        let row_class = move || {
                                            if selected_landmass.get() == id {
                                                "admin-world-row selected"
                                            } else {
                                                "admin-world-row"
                                            }
                                        };
                                        view! {
                                            <li class=row_class>
                                                <button
                                                    class="admin-world-row-name"
                                                    on:click=move |_| set_selected_landmass.set(select_id.clone())
                                                >
                                                    {landmass.name.clone()}
                                                </button>
                                                <button
                                                    class="button info sm"
                                                    on:click=move |_| open_edit_landmass(edit_landmass.clone())
                                                >
                                                    <i class="fas fa-edit"></i>
                                                </button>
                                                <button
                                                    class="button danger sm"
                                                    on:click=move |_| set_delete_target.set(
                                                        Some(DeleteTarget::Landmass(delete_landmass.clone()))
                                                    )
                                                >
                                                    <i class="fas fa-trash-alt"></i>
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </div>

                        // ── Regions ─────────────────────────────────
                        <div class="admin-world-column">
                            <div class="admin-world-column-header">
                                <h2>"Regions"</h2>
                                <Show when=move || !selected_landmass.get().is_empty()>
                                    <button class="button primary sm" on:click=move |_| open_create("region")>
                                        <i class="fas fa-plus"></i>
                                    </button>
                                </Show>
                            </div>
                            {move || if selected_landmass.get().is_empty() {
                                view! { <p class="admin-form-hint">"Select a landmass"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="admin-world-list">
                                        <For
                                            each=move || regions.get()
                                            key=|region| region.id.clone()
                                            children=move |region| {
                                                let id = region.id.clone();
                                                let select_id = id.clone();
                                                let edit_region = region.clone();
                                                let delete_region = region.clone();
                                                let row_class = move || {
                                                    if selected_region.get() == id {
                                                        "admin-world-row selected"
                                                    } else {
                                                        "admin-world-row"
                                                    }
                                                };
                                                view! {
                                                    <li class=row_class>
                                                        <button
                                                            class="admin-world-row-name"
                                                            on:click=move |_| set_selected_region.set(select_id.clone())
                                                        >
                                                            {region.name.clone()}
                                                        </button>
                                                        <button
                                                            class="button info sm"
                                                            on:click=move |_| open_edit_region(edit_region.clone())
                                                        >
                                                            <i class="fas fa-edit"></i>
                                                        </button>
                                                        <button
                                                            class="button danger sm"
                                                            on:click=move |_| set_delete_target.set(
                                                                Some(DeleteTarget::Region(delete_region.clone()))
                                                            )
                                                        >
                                                            <i class="fas fa-trash-alt"></i>
                                                        </button>
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
                                }.into_any()
                            }}
                        </div>

                        // ── Areas ───────────────────────────────────
                        <div class="admin-world-column">
                            <div class="admin-world-column-header">
                                <h2>"Areas"</h2>
                                <Show when=move || !selected_region.get().is_empty()>
                                    <button class="button primary sm" on:click=move |_| open_create("area")>
                                        <i class="fas fa-plus"></i>
                                    </button>
                                </Show>
                            </div>
                            {move || if selected_region.get().is_empty() {
                                view! { <p class="admin-form-hint">"Select a region"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="admin-world-list">
                                        <For
                                            each=move || areas.get()
                                            key=|area| area.id.clone()
                                            children=move |area| {
                                                let edit_area = area.clone();
                                                let delete_area = area.clone();
                                                view! {
                                                    <li class="admin-world-row">
                                                        <span class="admin-world-row-name">{area.name.clone()}</span>
                                                        <button
                                                            class="button info sm"
                                                            on:click=move |_| open_edit_area(edit_area.clone())
                                                        >
                                                            <i class="fas fa-edit"></i>
                                                        </button>
                                                        <button
                                                            class="button danger sm"
                                                            on:click=move |_| set_delete_target.set(
                                                                Some(DeleteTarget::Area(delete_area.clone()))
                                                            )
                                                        >
                                                            <i class="fas fa-trash-alt"></i>
                                                        </button>
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
                                }.into_any()
                            }}
                        </div>
                    </div>
                }.into_any()
            }}

            // ── Shared editor panel ─────────────────────────────────
            {move || editor_level.get().map(|level| view! {
                <form class="admin-form admin-inline-form" on:submit=save>
                    <h2 class="admin-form-section-title">
                        {move || {
                            let action = if editor_id.get().is_some() { "Edit" } else { "New" };
                            format!("{action} {level}")
                        }}
                    </h2>
                    <div class="admin-form-grid">
                        <div class="admin-form-group">
                            <label class="admin-form-label">"ID" <span class="required">" *"</span></label>
                            <input
                                type="text"
                                class="admin-form-input"
                                placeholder="e.g., conoco-island"
                                prop:value=move || form_id.get()
                                on:input=move |ev| form_id.set(event_target_value(&ev))
                                disabled=move || saving.get() || editor_id.get().is_some()
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
                            <label class="admin-form-label">"Image"</label>
                            <input
                                type="text"
                                class="admin-form-input"
                                prop:value=move || form_image.get()
                                on:input=move |ev| form_image.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            />
                        </div>
                        <Show when=move || level != "area">
                            <div class="admin-form-group">
                                <label class="admin-form-label">"Climate"</label>
                                <input
                                    type="text"
                                    class="admin-form-input"
                                    prop:value=move || form_climate.get()
                                    on:input=move |ev| form_climate.set(event_target_value(&ev))
                                    disabled=move || saving.get()
                                />
                            </div>
                            <div class="admin-form-group">
                                <label class="admin-form-label">"Dominant Types"</label>
                                <input
                                    type="text"
                                    class="admin-form-input"
                                    placeholder="Comma separated, e.g. Fire, Rock"
                                    prop:value=move || form_types.get()
                                    on:input=move |ev| form_types.set(event_target_value(&ev))
                                    disabled=move || saving.get()
                                />
                            </div>
                        </Show>
                        <Show when=move || level == "region">
                            <div class="admin-form-group">
                                <label class="admin-form-label">"Elevation"</label>
                                <input
                                    type="text"
                                    class="admin-form-input"
                                    placeholder="e.g., 200 - 800 ft"
                                    prop:value=move || form_elevation.get()
                                    on:input=move |ev| form_elevation.set(event_target_value(&ev))
                                    disabled=move || saving.get()
                                />
                            </div>
                        </Show>
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
                    <Show when=move || level == "landmass">
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Lore"</label>
                            <textarea
                                class="admin-form-textarea"
                                rows="2"
                                prop:value=move || form_lore.get()
                                on:input=move |ev| form_lore.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            ></textarea>
                        </div>
                    </Show>

                    <div class="admin-form-actions">
                        <button type="button" class="button secondary" on:click=move |_| set_editor_level.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="button primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            })}

            {move || delete_target.get().map(|target| {
                let name = match &target {
                    DeleteTarget::Landmass(l) => l.name.clone(),
                    DeleteTarget::Region(r) => r.name.clone(),
                    DeleteTarget::Area(a) => a.name.clone(),
                };
                view! {
                    <ConfirmModal
                        title="Confirm Deletion"
                        message=format!("Are you sure you want to delete {name}?")
                        confirm_label="Delete"
                        on_confirm=confirm_delete
                        on_cancel=move |()| set_delete_target.set(None)
                    />
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_types() {
        assert_eq!(split_types("Fire, Rock , Steel"), vec!["Fire", "Rock", "Steel"]);
        assert_eq!(split_types(""), Vec::<String>::new());
        assert_eq!(split_types("Water,,"), vec!["Water"]);
    }
}

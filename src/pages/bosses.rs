//! Boss Admin Page
//!
//! Monthly boss CRUD: HP pool, schedule month/year, status, and the reward
//! and grunt monster templates.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ConfirmModal, LoadingIndicator};
use crate::context::{AdminPage, AppContext};
use crate::models::{Boss, BossMonsterData, BOSS_STATUSES};

const MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[component]
pub fn BossAdminPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (bosses, set_bosses) = signal(Vec::<Boss>::new());
    let (loading, set_loading) = signal(true);
    let (delete_target, set_delete_target) = signal::<Option<Boss>>(None);

    // Editor: None hidden, Some(None) creating, Some(Some(id)) editing.
    let (editing, set_editing) = signal::<Option<Option<u32>>>(None);
    let (saving, set_saving) = signal(false);
    let form_name = RwSignal::new(String::new());
    let form_image_url = RwSignal::new(String::new());
    let form_total_hp = RwSignal::new(10_000i64);
    let form_status = RwSignal::new("upcoming".to_string());
    let form_month = RwSignal::new(1u8);
    let form_year = RwSignal::new(2026u16);
    let form_description = RwSignal::new(String::new());
    let reward_name = RwSignal::new(String::new());
    let reward_attribute = RwSignal::new(String::new());
    let reward_species = RwSignal::new(Vec::<String>::new());
    let reward_types = RwSignal::new(Vec::<String>::new());
    let grunt_name = RwSignal::new(String::new());
    let grunt_attribute = RwSignal::new(String::new());
    let grunt_species = RwSignal::new(Vec::<String>::new());
    let grunt_types = RwSignal::new(Vec::<String>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_bosses().await {
                Ok(loaded) => set_bosses.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(&format!("[BOSSES] Failed to load: {err}").into());
                    ctx.error("Failed to load bosses");
                }
            }
            set_loading.set(false);
        });
    });

    let open_create = move |_| {
        form_name.set(String::new());
        form_image_url.set(String::new());
        form_total_hp.set(10_000);
        form_status.set("upcoming".to_string());
        form_month.set(1);
        form_year.set(2026);
        form_description.set(String::new());
        reward_name.set(String::new());
        reward_attribute.set(String::new());
        reward_species.set(Vec::new());
        reward_types.set(Vec::new());
        grunt_name.set(String::new());
        grunt_attribute.set(String::new());
        grunt_species.set(Vec::new());
        grunt_types.set(Vec::new());
        set_editing.set(Some(None));
    };

    let open_edit = move |boss: Boss| {
        form_name.set(boss.name);
        form_image_url.set(boss.image_url);
        form_total_hp.set(boss.total_hp);
        form_status.set(boss.status);
        form_month.set(boss.month);
        form_year.set(boss.year);
        form_description.set(boss.description);
        reward_name.set(boss.reward_monster_data.name);
        reward_attribute.set(boss.reward_monster_data.attribute);
        reward_species.set(boss.reward_monster_data.species);
        reward_types.set(boss.reward_monster_data.types);
        grunt_name.set(boss.grunt_monster_data.name);
        grunt_attribute.set(boss.grunt_monster_data.attribute);
        grunt_species.set(boss.grunt_monster_data.species);
        grunt_types.set(boss.grunt_monster_data.types);
        set_editing.set(Some(Some(boss.id)));
    };

    let save_boss = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form_name.get_untracked().is_empty() || form_total_hp.get_untracked() <= 0 {
            ctx.error("Boss name and a positive HP pool are required");
            return;
        }
        let Some(target) = editing.get_untracked() else {
            return;
        };
        let boss = Boss {
            id: target.unwrap_or(0),
            name: form_name.get_untracked(),
            image_url: form_image_url.get_untracked(),
            total_hp: form_total_hp.get_untracked(),
            current_hp: 0,
            status: form_status.get_untracked(),
            month: form_month.get_untracked(),
            year: form_year.get_untracked(),
            description: form_description.get_untracked(),
            reward_monster_data: BossMonsterData {
                name: reward_name.get_untracked(),
                attribute: reward_attribute.get_untracked(),
                species: reward_species.get_untracked(),
                types: reward_types.get_untracked(),
            },
            grunt_monster_data: BossMonsterData {
                name: grunt_name.get_untracked(),
                attribute: grunt_attribute.get_untracked(),
                species: grunt_species.get_untracked(),
                types: grunt_types.get_untracked(),
            },
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = match target {
                Some(id) => api::update_boss(id, &boss).await,
                None => api::create_boss(&boss).await,
            };
            match result {
                Ok(saved) => {
                    let verb = if target.is_some() { "updated" } else { "created" };
                    ctx.success(format!("Boss {} {verb} successfully", saved.name));
                    set_editing.set(None);
                    ctx.reload();
                }
                Err(err) => ctx.error(format!("Failed to save boss: {err}")),
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
            match api::delete_boss(target.id).await {
                Ok(()) => {
                    set_bosses.update(|rows| rows.retain(|b| b.id != target.id));
                    ctx.success(format!("Boss {} deleted successfully", target.name));
                }
                Err(err) => ctx.error(format!("Failed to delete boss: {err}")),
            }
        });
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">"Boss Management"</h1>
                <p class="admin-dashboard-subtitle">"Manage monthly bosses, rewards, and boss battles"</p>
            </div>

            <div class="admin-actions">
                <button class="button secondary" on:click=move |_| ctx.navigate(AdminPage::Dashboard)>
                    <i class="fas fa-arrow-left"></i>
                    " Back to Dashboard"
                </button>
                <button class="button primary" on:click=open_create>
                    <i class="fas fa-plus"></i>
                    " Add New Boss"
                </button>
            </div>

            {move || editing.get().map(|target| view! {
                <form class="admin-form admin-inline-form" on:submit=save_boss>
                    <h2 class="admin-form-section-title">
                        {if target.is_some() { "Edit Boss" } else { "New Boss" }}
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
                            <label class="admin-form-label">"Image URL"</label>
                            <input
                                type="text"
                                class="admin-form-input"
                                prop:value=move || form_image_url.get()
                                on:input=move |ev| form_image_url.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            />
                        </div>
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Total HP" <span class="required">" *"</span></label>
                            <input
                                type="number"
                                class="admin-form-input"
                                min="1"
                                prop:value=move || form_total_hp.get().to_string()
                                on:input=move |ev| form_total_hp.set(event_target_value(&ev).parse().unwrap_or(0))
                                disabled=move || saving.get()
                            />
                        </div>
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Status"</label>
                            <select
                                class="admin-form-select"
                                prop:value=move || form_status.get()
                                on:change=move |ev| form_status.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            >
                                {BOSS_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                            </select>
                        </div>
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Month"</label>
                            <select
                                class="admin-form-select"
                                prop:value=move || form_month.get().to_string()
                                on:change=move |ev| form_month.set(event_target_value(&ev).parse().unwrap_or(1))
                                disabled=move || saving.get()
                            >
                                {MONTH_NAMES.iter().enumerate().map(|(i, label)| {
                                    let value = (i + 1).to_string();
                                    view! { <option value=value>{*label}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="admin-form-group">
                            <label class="admin-form-label">"Year"</label>
                            <input
                                type="number"
                                class="admin-form-input"
                                min="2020"
                                max="2100"
                                prop:value=move || form_year.get().to_string()
                                on:input=move |ev| form_year.set(event_target_value(&ev).parse().unwrap_or(2026))
                                disabled=move || saving.get()
                            />
                        </div>
                    </div>

                    <div class="admin-form-group">
                        <label class="admin-form-label">"Description"</label>
                        <textarea
                            class="admin-form-textarea"
                            rows="3"
                            prop:value=move || form_description.get()
                            on:input=move |ev| form_description.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        ></textarea>
                    </div>

                    <div class="admin-form-grid">
                        <MonsterDataEditor
                            title="Reward Monster"
                            name=reward_name
                            attribute=reward_attribute
                            species=reward_species
                            types=reward_types
                            disabled=saving.into()
                        />
                        <MonsterDataEditor
                            title="Grunt Monster"
                            name=grunt_name
                            attribute=grunt_attribute
                            species=grunt_species
                            types=grunt_types
                            disabled=saving.into()
                        />
                    </div>

                    <div class="admin-form-actions">
                        <button type="button" class="button secondary" on:click=move |_| set_editing.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="button primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Boss" }}
                        </button>
                    </div>
                </form>
            })}

            {move || if loading.get() {
                view! { <LoadingIndicator message="Loading bosses..." /> }.into_any()
            } else {
                view! {
                    <div class="admin-table-container">
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Boss"</th>
                                    <th>"Schedule"</th>
                                    <th>"HP Pool"</th>
                                    <th>"Status"</th>
                                    <th>"Reward"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || if bosses.get().is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="text-center">"No bosses found"</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    view! {
                                        <For
                                            each=move || bosses.get()
                                            key=|boss| boss.id
                                            children=move |boss| {
                                                let month = MONTH_NAMES
                                                    .get(usize::from(boss.month).saturating_sub(1))
                                                    .copied()
                                                    .unwrap_or("?");
                                                let schedule = format!("{month} {}", boss.year);
                                                let reward = if boss.reward_monster_data.name.is_empty() {
                                                    "-".to_string()
                                                } else {
                                                    boss.reward_monster_data.name.clone()
                                                };
                                                let edit_boss = boss.clone();
                                                let delete_boss = boss.clone();
                                                view! {
                                                    <tr>
                                                        <td>{boss.name.clone()}</td>
                                                        <td>{schedule}</td>
                                                        <td>{boss.total_hp}</td>
                                                        <td>{boss.status.clone()}</td>
                                                        <td>{reward}</td>
                                                        <td class="admin-actions-cell">
                                                            <button
                                                                class="button info sm"
                                                                title="Edit Boss"
                                                                on:click=move |_| open_edit(edit_boss.clone())
                                                            >
                                                                <i class="fas fa-edit"></i>
                                                            </button>
                                                            <button
                                                                class="button danger sm"
                                                                title="Delete Boss"
                                                                on:click=move |_| set_delete_target.set(Some(delete_boss.clone()))
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

            {move || delete_target.get().map(|target| view! {
                <ConfirmModal
                    title="Confirm Deletion"
                    message=format!("Are you sure you want to delete the boss {}?", target.name)
                    confirm_label="Delete Boss"
                    on_confirm=confirm_delete
                    on_cancel=move |()| set_delete_target.set(None)
                />
            })}
        </div>
    }
}

/// Shared editor for the reward and grunt monster templates: name,
/// attribute, up to three species slots, up to five type slots.
#[component]
fn MonsterDataEditor(
    #[prop(into)] title: String,
    name: RwSignal<String>,
    attribute: RwSignal<String>,
    species: RwSignal<Vec<String>>,
    types: RwSignal<Vec<String>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="admin-form-section">
            <h3 class="admin-form-section-title">{title}</h3>
            <div class="admin-form-group">
                <label class="admin-form-label">"Name"</label>
                <input
                    type="text"
                    class="admin-form-input"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
            </div>
            <div class="admin-form-group">
                <label class="admin-form-label">"Attribute"</label>
                <input
                    type="text"
                    class="admin-form-input"
                    prop:value=move || attribute.get()
                    on:input=move |ev| attribute.set(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
            </div>
            <SlotListEditor label="Species" slots=species max=3 disabled=disabled />
            <SlotListEditor label="Types" slots=types max=5 disabled=disabled />
        </div>
    }
}

/// Add/remove editor for a short list of text slots.
#[component]
fn SlotListEditor(
    #[prop(into)] label: String,
    slots: RwSignal<Vec<String>>,
    max: usize,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="admin-form-group">
            <label class="admin-form-label">{label}</label>
            <For
                each=move || 0..slots.get().len()
                key=|i| *i
                children=move |i| view! {
                    <div class="admin-slot-row">
                        <input
                            type="text"
                            class="admin-form-input"
                            prop:value=move || slots.with(|s| s.get(i).cloned().unwrap_or_default())
                            on:input=move |ev| slots.update(|s| {
                                if let Some(slot) = s.get_mut(i) {
                                    *slot = event_target_value(&ev);
                                }
                            })
                            disabled=move || disabled.get()
                        />
                        <button
                            type="button"
                            class="button danger sm"
                            on:click=move |_| slots.update(|s| {
                                if i < s.len() {
                                    s.remove(i);
                                }
                            })
                            disabled=move || disabled.get()
                        >
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                }
            />
            <Show when=move || slots.get().len() < max>
                <button
                    type="button"
                    class="button secondary sm"
                    on:click=move |_| slots.update(|s| s.push(String::new()))
                    disabled=move || disabled.get()
                >
                    <i class="fas fa-plus"></i>
                    " Add"
                </button>
            </Show>
        </div>
    }
}

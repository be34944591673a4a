//! Monster Form Page
//!
//! Create/edit form for trainer-owned monsters, including image upload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LoadingIndicator;
use crate::context::{AdminPage, AppContext};
use crate::models::{Monster, FRANCHISES};
use crate::store::{ensure_types_loaded, use_app_store, AppStateStoreFields};

const GENDERS: &[&str] = &["Male", "Female", "Genderless"];

const STAT_FIELDS: &[&str] = &["HP", "Attack", "Defense", "Sp. Attack", "Sp. Defense", "Speed"];

#[component]
pub fn MonsterFormPage(
    /// `None` creates a new monster, `Some(id)` edits an existing one.
    id: Option<u32>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let is_edit = id.is_some();

    let (loading, set_loading) = signal(is_edit);
    let (saving, set_saving) = signal(false);
    let (uploading, set_uploading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let name = RwSignal::new(String::new());
    let franchise = RwSignal::new("pokemon".to_string());
    let trainer_id = RwSignal::new(String::new());
    let level = RwSignal::new(1u16);
    let species: [RwSignal<String>; 3] = std::array::from_fn(|_| RwSignal::new(String::new()));
    let type1 = RwSignal::new(String::new());
    let type2 = RwSignal::new(String::new());
    let attribute = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let nature = RwSignal::new(String::new());
    let characteristic = RwSignal::new(String::new());
    let ability1 = RwSignal::new(String::new());
    let ability2 = RwSignal::new(String::new());
    let hidden_ability = RwSignal::new(String::new());
    let friendship = RwSignal::new(70u16);
    let shiny = RwSignal::new(false);
    let alpha = RwSignal::new(false);
    let shadow = RwSignal::new(false);
    let paradox = RwSignal::new(false);
    let image_url = RwSignal::new(String::new());
    let stat_totals: [RwSignal<u16>; 6] = std::array::from_fn(|_| RwSignal::new(50u16));

    ensure_types_loaded(store);

    Effect::new(move |_| {
        let Some(monster_id) = id else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::get_monster(monster_id).await {
                Ok(mon) => {
                    name.set(mon.name);
                    franchise.set(mon.franchise);
                    trainer_id.set(mon.trainer_id.map(|t| t.to_string()).unwrap_or_default());
                    level.set(mon.level);
                    species[0].set(mon.species1);
                    species[1].set(mon.species2);
                    species[2].set(mon.species3);
                    type1.set(mon.type1);
                    type2.set(mon.type2.unwrap_or_default());
                    attribute.set(mon.attribute.unwrap_or_default());
                    gender.set(mon.gender);
                    nature.set(mon.nature);
                    characteristic.set(mon.characteristic);
                    ability1.set(mon.ability1);
                    ability2.set(mon.ability2);
                    hidden_ability.set(mon.hidden_ability);
                    friendship.set(mon.friendship);
                    shiny.set(mon.shiny);
                    alpha.set(mon.alpha);
                    shadow.set(mon.shadow);
                    paradox.set(mon.paradox);
                    image_url.set(mon.image_url);
                    stat_totals[0].set(mon.hp_total);
                    stat_totals[1].set(mon.atk_total);
                    stat_totals[2].set(mon.def_total);
                    stat_totals[3].set(mon.spa_total);
                    stat_totals[4].set(mon.spd_total);
                    stat_totals[5].set(mon.spe_total);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[MONSTERS] Failed to load #{monster_id}: {err}").into(),
                    );
                    set_error.set(Some(format!(
                        "Failed to load monster #{monster_id}. Please try again."
                    )));
                }
            }
            set_loading.set(false);
        });
    });

    let upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_image(file).await {
                Ok(url) => image_url.set(url),
                Err(err) => {
                    web_sys::console::error_1(&format!("[MONSTERS] Upload failed: {err}").into());
                    set_error.set(Some(format!("Image upload failed: {err}")));
                }
            }
            set_uploading.set(false);
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get_untracked().is_empty() || species[0].get_untracked().is_empty() {
            set_error.set(Some("Name and at least one species are required".to_string()));
            return;
        }

        let opt = |s: RwSignal<String>| {
            let v = s.get_untracked();
            (!v.is_empty()).then_some(v)
        };
        let mon = Monster {
            id: id.unwrap_or(0),
            name: name.get_untracked(),
            franchise: franchise.get_untracked(),
            trainer_id: trainer_id.get_untracked().parse().ok(),
            level: level.get_untracked(),
            species1: species[0].get_untracked(),
            species2: species[1].get_untracked(),
            species3: species[2].get_untracked(),
            type1: type1.get_untracked(),
            type2: opt(type2),
            attribute: opt(attribute),
            gender: gender.get_untracked(),
            nature: nature.get_untracked(),
            characteristic: characteristic.get_untracked(),
            ability1: ability1.get_untracked(),
            ability2: ability2.get_untracked(),
            hidden_ability: hidden_ability.get_untracked(),
            friendship: friendship.get_untracked(),
            shiny: shiny.get_untracked(),
            alpha: alpha.get_untracked(),
            shadow: shadow.get_untracked(),
            paradox: paradox.get_untracked(),
            image_url: image_url.get_untracked(),
            hp_total: stat_totals[0].get_untracked(),
            atk_total: stat_totals[1].get_untracked(),
            def_total: stat_totals[2].get_untracked(),
            spa_total: stat_totals[3].get_untracked(),
            spd_total: stat_totals[4].get_untracked(),
            spe_total: stat_totals[5].get_untracked(),
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(monster_id) => api::update_monster(monster_id, &mon).await,
                None => api::create_monster(&mon).await,
            };
            match result {
                Ok(saved) => {
                    let verb = if id.is_some() { "updated" } else { "created" };
                    ctx.success(format!("Monster {} {verb} successfully", saved.name));
                    ctx.navigate(AdminPage::MonsterList);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[MONSTERS] Save failed: {err}").into());
                    set_error.set(Some(format!("Failed to save monster: {err}")));
                    set_saving.set(false);
                }
            }
        });
    };

    let text_field = move |label: &'static str, value: RwSignal<String>, placeholder: &'static str| {
        view! {
            <div class="admin-form-group">
                <label class="admin-form-label">{label}</label>
                <input
                    type="text"
                    class="admin-form-input"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || saving.get()
                />
            </div>
        }
    };

    let flag_field = move |label: &'static str, value: RwSignal<bool>| {
        view! {
            <label class="admin-flag-option">
                <input
                    type="checkbox"
                    prop:checked=move || value.get()
                    on:change=move |ev| value.set(event_target_checked(&ev))
                    disabled=move || saving.get()
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">
                    {if is_edit { "Edit Monster" } else { "Add New Monster" }}
                </h1>
                <p class="admin-dashboard-subtitle">
                    {move || if is_edit {
                        format!("Editing: {}", name.get())
                    } else {
                        "Create a new monster record".to_string()
                    }}
                </p>
            </div>

            {move || error.get().map(|message| view! {
                <div class="admin-alert error">
                    <i class="fas fa-exclamation-circle"></i>
                    " "
                    {message}
                </div>
            })}

            <div class="admin-actions">
                <button class="button secondary" on:click=move |_| ctx.navigate(AdminPage::MonsterList)>
                    <i class="fas fa-arrow-left"></i>
                    " Back to Monster List"
                </button>
            </div>

            {move || if loading.get() {
                view! { <LoadingIndicator message="Loading monster data..." /> }.into_any()
            } else {
                view! {
                    <form class="admin-form" on:submit=submit>
                        <div class="admin-form-grid">
                            <div class="admin-form-section">
                                <h2 class="admin-form-section-title">"Basic Information"</h2>
                                {text_field("Name", name, "e.g., Sparky")}

                                <div class="admin-form-group">
                                    <label class="admin-form-label">"Franchise"</label>
                                    <select
                                        class="admin-form-select"
                                        prop:value=move || franchise.get()
                                        on:change=move |ev| franchise.set(event_target_value(&ev))
                                        disabled=move || saving.get()
                                    >
                                        {FRANCHISES.iter().map(|(value, label)| view! {
                                            <option value=*value>{*label}</option>
                                        }).collect_view()}
                                    </select>
                                </div>

                                {text_field("Trainer ID", trainer_id, "Blank for wild")}

                                <div class="admin-form-group">
                                    <label class="admin-form-label">"Level"</label>
                                    <input
                                        type="number"
                                        class="admin-form-input"
                                        min="1"
                                        max="100"
                                        prop:value=move || level.get().to_string()
                                        on:input=move |ev| level.set(event_target_value(&ev).parse().unwrap_or(1))
                                        disabled=move || saving.get()
                                    />
                                </div>

                                <div class="admin-form-group">
                                    <label class="admin-form-label">"Image"</label>
                                    <input type="file" accept="image/*" on:change=upload disabled=move || uploading.get() />
                                    {move || uploading.get().then(|| view! {
                                        <span class="admin-form-hint">"Uploading..."</span>
                                    })}
                                    {move || {
                                        let url = image_url.get();
                                        (!url.is_empty()).then(|| view! {
                                            <div class="admin-form-image-preview">
                                                <img src=url alt="Monster preview" />
                                            </div>
                                        })
                                    }}
                                </div>
                            </div>

                            <div class="admin-form-section">
                                <h2 class="admin-form-section-title">"Species and Types"</h2>
                                {text_field("Species 1", species[0], "e.g., Grass")}
                                {text_field("Species 2", species[1], "")}
                                {text_field("Species 3", species[2], "")}

                                <TypePicker label="Type 1" value=type1 disabled=saving.into() />
                                <TypePicker label="Type 2" value=type2 disabled=saving.into() />

                                {text_field("Attribute", attribute, "e.g., Legendary")}
                            </div>

                            <div class="admin-form-section">
                                <h2 class="admin-form-section-title">"Personality"</h2>

                                <div class="admin-form-group">
                                    <label class="admin-form-label">"Gender"</label>
                                    <select
                                        class="admin-form-select"
                                        prop:value=move || gender.get()
                                        on:change=move |ev| gender.set(event_target_value(&ev))
                                        disabled=move || saving.get()
                                    >
                                        <option value="">"Unknown"</option>
                                        {GENDERS.iter().map(|g| view! { <option value=*g>{*g}</option> }).collect_view()}
                                    </select>
                                </div>

                                {text_field("Nature", nature, "e.g., Brave")}
                                {text_field("Characteristic", characteristic, "e.g., Loves to eat")}

                                <div class="admin-form-group">
                                    <label class="admin-form-label">"Friendship"</label>
                                    <input
                                        type="number"
                                        class="admin-form-input"
                                        min="0"
                                        max="255"
                                        prop:value=move || friendship.get().to_string()
                                        on:input=move |ev| friendship.set(event_target_value(&ev).parse().unwrap_or(0))
                                        disabled=move || saving.get()
                                    />
                                </div>

                                <div class="admin-flag-row">
                                    {flag_field("Shiny", shiny)}
                                    {flag_field("Alpha", alpha)}
                                    {flag_field("Shadow", shadow)}
                                    {flag_field("Paradox", paradox)}
                                </div>
                            </div>

                            <div class="admin-form-section">
                                <h2 class="admin-form-section-title">"Abilities"</h2>
                                {text_field("Ability 1", ability1, "e.g., Overgrow")}
                                {text_field("Ability 2", ability2, "")}
                                {text_field("Hidden Ability", hidden_ability, "")}
                            </div>
                        </div>

                        <div class="admin-form-section">
                            <h2 class="admin-form-section-title">"Stat Totals"</h2>
                            <div class="admin-stats-grid">
                                {STAT_FIELDS.iter().enumerate().map(|(i, label)| {
                                    let stat = stat_totals[i];
                                    view! {
                                        <div class="admin-form-group">
                                            <label class="admin-form-label">{*label}</label>
                                            <input
                                                type="number"
                                                class="admin-form-input"
                                                min="1"
                                                max="255"
                                                prop:value=move || stat.get().to_string()
                                                on:input=move |ev| stat.set(event_target_value(&ev).parse().unwrap_or(0))
                                                disabled=move || saving.get()
                                            />
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <div class="admin-form-actions">
                            <button
                                type="button"
                                class="button secondary"
                                on:click=move |_| ctx.navigate(AdminPage::MonsterList)
                                disabled=move || saving.get()
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="button primary" disabled=move || saving.get() || uploading.get()>
                                {move || if saving.get() {
                                    if is_edit { "Updating..." } else { "Creating..." }
                                } else if is_edit {
                                    "Update Monster"
                                } else {
                                    "Create Monster"
                                }}
                            </button>
                        </div>
                    </form>
                }.into_any()
            }}
        </div>
    }
}

/// Type dropdown fed from the cached dex type list.
#[component]
fn TypePicker(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let store = use_app_store();
    view! {
        <div class="admin-form-group">
            <label class="admin-form-label">{label}</label>
            <select
                class="admin-form-select"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">"None"</option>
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
    }
}

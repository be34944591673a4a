//! Fakemon Form Page
//!
//! Create/edit form for dex entries: base data, typing, abilities, stats
//! (hand-entered or rolled by the generator), and the evolution line.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::api;
use crate::components::{LoadingIndicator, StatBar};
use crate::context::{AdminPage, AppContext};
use crate::format::{ordinal, stat_total};
use crate::models::{EvolutionEntry, Fakemon, SPECIES_ATTRIBUTES};
use crate::stats::{generate_stats, POWER_LEVELS, STAT_KEYS};
use crate::store::{ensure_types_loaded, use_app_store, AppStateStoreFields};
use crate::tree::{build_evolution_forest, flatten_forest};

const STAT_BAR_CLASSES: &[&str] = &[
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

#[component]
pub fn FakemonFormPage(
    /// `None` creates a new entry, `Some(number)` edits an existing one.
    number: Option<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let edit_number = number;
    let is_edit = edit_number.is_some();

    let (loading, set_loading) = signal(is_edit);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let number = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let attribute = RwSignal::new(String::new());
    let types: [RwSignal<String>; 5] = std::array::from_fn(|_| RwSignal::new(String::new()));
    let ability1 = RwSignal::new(String::new());
    let ability2 = RwSignal::new(String::new());
    let hidden_ability = RwSignal::new(String::new());
    let stats: [RwSignal<u16>; 6] = std::array::from_fn(|_| RwSignal::new(50u16));
    let evolution_line = RwSignal::new(Vec::<EvolutionEntry>::new());

    // Stat generator controls
    let (power_level, set_power_level) = signal("average".to_string());
    let specialties = RwSignal::new([false; 6]);
    let (generated_target, set_generated_target) = signal::<Option<u32>>(None);

    ensure_types_loaded(store);

    // Edit mode loads the entry; create mode asks for the next free number.
    {
        let edit_number = edit_number.clone();
        Effect::new(move |_| match edit_number.clone() {
            Some(num) => {
                set_loading.set(true);
                spawn_local(async move {
                    match api::get_fakemon(&num).await {
                        Ok(mon) => {
                            number.set(mon.number);
                            name.set(mon.name);
                            category.set(mon.category);
                            image_url.set(mon.image_url);
                            description.set(mon.description);
                            attribute.set(mon.attribute.unwrap_or_default());
                            types[0].set(mon.type1);
                            types[1].set(mon.type2.unwrap_or_default());
                            types[2].set(mon.type3.unwrap_or_default());
                            types[3].set(mon.type4.unwrap_or_default());
                            types[4].set(mon.type5.unwrap_or_default());
                            ability1.set(mon.ability1);
                            ability2.set(mon.ability2);
                            hidden_ability.set(mon.hidden_ability);
                            stats[0].set(mon.hp);
                            stats[1].set(mon.attack);
                            stats[2].set(mon.defense);
                            stats[3].set(mon.special_attack);
                            stats[4].set(mon.special_defense);
                            stats[5].set(mon.speed);
                            evolution_line.set(mon.evolution_line);
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("[FAKEMON] Failed to load #{num}: {err}").into(),
                            );
                            set_error.set(Some(format!(
                                "Failed to load fakemon #{num}. Please try again."
                            )));
                        }
                    }
                    set_loading.set(false);
                });
            }
            None => {
                spawn_local(async move {
                    if let Ok(next) = api::next_fakemon_number().await {
                        number.set(next);
                    }
                });
            }
        });
    }

    let roll_stats = move |_| {
        let picked: Vec<usize> = specialties
            .get_untracked()
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect();
        let mut rng = SmallRng::from_entropy();
        if let Some(generated) = generate_stats(&power_level.get_untracked(), &picked, &mut rng) {
            for (slot, value) in stats.iter().zip(generated.stats) {
                slot.set(value);
            }
            set_generated_target.set(Some(generated.target));
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if number.get_untracked().is_empty()
            || name.get_untracked().is_empty()
            || category.get_untracked().is_empty()
            || types[0].get_untracked().is_empty()
        {
            set_error.set(Some(
                "Number, name, category, and at least one type are required".to_string(),
            ));
            return;
        }

        let opt = |s: RwSignal<String>| {
            let v = s.get_untracked();
            (!v.is_empty()).then_some(v)
        };
        let mon = Fakemon {
            number: number.get_untracked(),
            name: name.get_untracked(),
            category: category.get_untracked(),
            type1: types[0].get_untracked(),
            type2: opt(types[1]),
            type3: opt(types[2]),
            type4: opt(types[3]),
            type5: opt(types[4]),
            attribute: opt(attribute),
            description: description.get_untracked(),
            image_url: image_url.get_untracked(),
            evolution_line: evolution_line.get_untracked(),
            ability1: ability1.get_untracked(),
            ability2: ability2.get_untracked(),
            hidden_ability: hidden_ability.get_untracked(),
            hp: stats[0].get_untracked(),
            attack: stats[1].get_untracked(),
            defense: stats[2].get_untracked(),
            special_attack: stats[3].get_untracked(),
            special_defense: stats[4].get_untracked(),
            speed: stats[5].get_untracked(),
        };

        set_saving.set(true);
        let editing = is_edit;
        spawn_local(async move {
            let result = if editing {
                api::update_fakemon(&mon.number, &mon).await
            } else {
                api::create_fakemon(&mon).await
            };
            match result {
                Ok(saved) => {
                    let verb = if editing { "updated" } else { "created" };
                    ctx.success(format!(
                        "Fakemon #{} ({}) {verb} successfully",
                        saved.number, saved.name
                    ));
                    ctx.navigate(AdminPage::FakemonList);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FAKEMON] Save failed: {err}").into());
                    set_error.set(Some(format!("Failed to save fakemon: {err}")));
                    set_saving.set(false);
                }
            }
        });
    };

    let add_evolution = move |_| {
        evolution_line.update(|line| {
            line.push(EvolutionEntry {
                number: String::new(),
                name: String::new(),
                level: String::new(),
                evolves_from: None,
            });
        });
    };

    let title = if is_edit {
        "Edit Fakemon".to_string()
    } else {
        "Add New Fakemon".to_string()
    };

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">{title}</h1>
                <p class="admin-dashboard-subtitle">
                    {move || if is_edit {
                        format!("Editing: {}", name.get())
                    } else {
                        "Create a new fakemon entry".to_string()
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
                <button class="button secondary" on:click=move |_| ctx.navigate(AdminPage::FakemonList)>
                    <i class="fas fa-arrow-left"></i>
                    " Back to Fakemon List"
                </button>
            </div>

            {move || if loading.get() {
                view! { <LoadingIndicator message="Loading fakemon data..." /> }.into_any()
            } else {
                view! {
                    <form class="admin-form" on:submit=submit>
                        <div class="admin-form-grid">
                            <div class="admin-form-section">
                                <h2 class="admin-form-section-title">"Basic Information"</h2>
                                <TextField label="Number" value=number required=true disabled=Signal::derive(move || is_edit || saving.get()) placeholder="e.g., 001" />
                                <TextField label="Name" value=name required=true disabled=saving.into() placeholder="e.g., Bulbasaur" />
                                <TextField label="Category" value=category required=true disabled=saving.into() placeholder="e.g., Seed" />
                                <TextField label="Image URL" value=image_url required=false disabled=saving.into() placeholder="https://example.com/image.png" />
                                {move || {
                                    let url = image_url.get();
                                    (!url.is_empty()).then(|| view! {
                                        <div class="admin-form-image-preview">
                                            <img src=url alt="Fakemon preview" />
                                        </div>
                                    })
                                }}
                            </div>

                            <div class="admin-form-section">
                                <h2 class="admin-form-section-title">"Types"</h2>
                                {types.iter().enumerate().map(|(i, slot)| {
                                    let label = format!("Type {}", i + 1);
                                    view! {
                                        <TypeSelect label=label value=*slot required={i == 0} disabled=saving.into() />
                                    }
                                }).collect_view()}

                                <div class="admin-form-group">
                                    <label class="admin-form-label">"Attribute"</label>
                                    <select
                                        class="admin-form-select"
                                        prop:value=move || attribute.get()
                                        on:change=move |ev| attribute.set(event_target_value(&ev))
                                        disabled=move || saving.get()
                                    >
                                        <option value="">"None"</option>
                                        {SPECIES_ATTRIBUTES.iter().map(|attr| view! {
                                            <option value=*attr>{*attr}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                            </div>
                        </div>

                        <div class="admin-form-section">
                            <h2 class="admin-form-section-title">"Description"</h2>
                            <div class="admin-form-group">
                                <textarea
                                    class="admin-form-textarea"
                                    rows="4"
                                    placeholder="Enter a description for this fakemon..."
                                    prop:value=move || description.get()
                                    on:input=move |ev| description.set(event_target_value(&ev))
                                    disabled=move || saving.get()
                                ></textarea>
                            </div>
                        </div>

                        <div class="admin-form-section">
                            <h2 class="admin-form-section-title">"Abilities"</h2>
                            <TextField label="Ability 1" value=ability1 required=false disabled=saving.into() placeholder="e.g., Overgrow" />
                            <TextField label="Ability 2" value=ability2 required=false disabled=saving.into() placeholder="e.g., Chlorophyll" />
                            <TextField label="Hidden Ability" value=hidden_ability required=false disabled=saving.into() placeholder="e.g., Leaf Guard" />
                        </div>

                        <div class="admin-form-section">
                            <h2 class="admin-form-section-title">"Base Stats"</h2>

                            <div class="admin-stat-generator">
                                <div class="admin-form-group">
                                    <label class="admin-form-label">"Power Level"</label>
                                    <select
                                        class="admin-form-select"
                                        prop:value=move || power_level.get()
                                        on:change=move |ev| set_power_level.set(event_target_value(&ev))
                                    >
                                        {POWER_LEVELS.iter().map(|(key, label, (lo, hi))| view! {
                                            <option value=*key>{format!("{label} ({lo}-{hi} BST)")}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div class="admin-specialty-row">
                                    <span class="admin-form-label">"Specialties:"</span>
                                    {STAT_KEYS.iter().enumerate().map(|(i, (_, label))| {
                                        let checked = move || specialties.get()[i];
                                        view! {
                                            <label class="admin-specialty-option">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=checked
                                                    on:change=move |_| specialties.update(|s| s[i] = !s[i])
                                                />
                                                {*label}
                                            </label>
                                        }
                                    }).collect_view()}
                                </div>
                                <button type="button" class="button primary" on:click=roll_stats>
                                    <i class="fas fa-dice"></i>
                                    " Generate Stats"
                                </button>
                                {move || generated_target.get().map(|target| view! {
                                    <span class="admin-generator-result">{format!("Rolled BST: {target}")}</span>
                                })}
                            </div>

                            <div class="admin-stats-grid">
                                {STAT_KEYS.iter().enumerate().map(|(i, (_, label))| {
                                    let stat = stats[i];
                                    view! {
                                        <div class="admin-form-group">
                                            <label class="admin-form-label">{*label}</label>
                                            <input
                                                type="number"
                                                class="admin-form-input"
                                                min="1"
                                                max="255"
                                                prop:value=move || stat.get().to_string()
                                                on:input=move |ev| {
                                                    stat.set(event_target_value(&ev).parse().unwrap_or(0));
                                                }
                                                disabled=move || saving.get()
                                            />
                                            <StatBar value=stat.into() class=STAT_BAR_CLASSES[i] />
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                            <p class="admin-form-hint">
                                {move || {
                                    let values: [u16; 6] = std::array::from_fn(|i| stats[i].get());
                                    format!("Base stat total: {}", stat_total(&values))
                                }}
                            </p>
                        </div>

                        <div class="admin-form-section">
                            <h2 class="admin-form-section-title">"Evolution Line"</h2>

                            <Show when=move || evolution_line.get().is_empty()>
                                <p class="admin-form-hint">"No evolutions added yet."</p>
                            </Show>
                            <div class="admin-evolution-list">
                                <For
                                    each=move || 0..evolution_line.get().len()
                                    key=|i| *i
                                    children=move |i| view! {
                                        <EvolutionRow index=i line=evolution_line disabled=saving.into() />
                                    }
                                />
                            </div>

                            <button type="button" class="button secondary" on:click=add_evolution disabled=move || saving.get()>
                                <i class="fas fa-plus"></i>
                                " Add Evolution"
                            </button>

                            // Live preview of the tree the flat entries describe
                            {move || {
                                let line = evolution_line.get();
                                (!line.is_empty()).then(|| {
                                    let flat = flatten_forest(&build_evolution_forest(&line));
                                    view! {
                                        <div class="admin-evolution-preview">
                                            {flat.into_iter().map(|(entry, depth)| {
                                                let indent = format!("{}em", depth * 2);
                                                let label = if entry.name.is_empty() {
                                                    format!("#{}", entry.number)
                                                } else {
                                                    format!("#{} {}", entry.number, entry.name)
                                                };
                                                let stage = format!("{} stage", ordinal(depth as u32 + 1));
                                                view! {
                                                    <div class="admin-evolution-preview-row" style:margin-left=indent>
                                                        {label}
                                                        <span class="admin-evolution-stage">{stage}</span>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    }
                                })
                            }}
                        </div>

                        <div class="admin-form-actions">
                            <button
                                type="button"
                                class="button secondary"
                                on:click=move |_| ctx.navigate(AdminPage::FakemonList)
                                disabled=move || saving.get()
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="button primary" disabled=move || saving.get()>
                                {move || if saving.get() {
                                    if is_edit { "Updating..." } else { "Creating..." }
                                } else if is_edit {
                                    "Update Fakemon"
                                } else {
                                    "Create Fakemon"
                                }}
                            </button>
                        </div>
                    </form>
                }.into_any()
            }}
        </div>
    }
}

/// Labeled text input bound to one string signal.
#[component]
fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    required: bool,
    disabled: Signal<bool>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="admin-form-group">
            <label class="admin-form-label">
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <input
                type="text"
                class="admin-form-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Type dropdown fed from the cached dex type list.
#[component]
fn TypeSelect(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    required: bool,
    disabled: Signal<bool>,
) -> impl IntoView {
    let store = use_app_store();
    view! {
        <div class="admin-form-group">
            <label class="admin-form-label">
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <select
                class="admin-form-select"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">{if required { "Select Type" } else { "None" }}</option>
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

/// One editable stage of the evolution line, addressed by index.
#[component]
fn EvolutionRow(
    index: usize,
    line: RwSignal<Vec<EvolutionEntry>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let read = move |field: fn(&EvolutionEntry) -> String| {
        line.with(|entries| entries.get(index).map(field).unwrap_or_default())
    };
    let write = move |apply: fn(&mut EvolutionEntry, String), value: String| {
        line.update(|entries| {
            if let Some(target) = entries.get_mut(index) {
                apply(target, value);
            }
        });
    };

    view! {
        <div class="admin-evolution-item">
            <div class="admin-evolution-fields">
                <div class="admin-form-group">
                    <label class="admin-form-label">"Number"</label>
                    <input
                        type="text"
                        class="admin-form-input"
                        placeholder="e.g., 002"
                        prop:value=move || read(|e| e.number.clone())
                        on:input=move |ev| write(|e, v| e.number = v, event_target_value(&ev))
                        disabled=move || disabled.get()
                    />
                </div>
                <div class="admin-form-group">
                    <label class="admin-form-label">"Name"</label>
                    <input
                        type="text"
                        class="admin-form-input"
                        placeholder="e.g., Ivysaur"
                        prop:value=move || read(|e| e.name.clone())
                        on:input=move |ev| write(|e, v| e.name = v, event_target_value(&ev))
                        disabled=move || disabled.get()
                    />
                </div>
                <div class="admin-form-group">
                    <label class="admin-form-label">"Level"</label>
                    <input
                        type="text"
                        class="admin-form-input"
                        placeholder="e.g., 16"
                        prop:value=move || read(|e| e.level.clone())
                        on:input=move |ev| write(|e, v| e.level = v, event_target_value(&ev))
                        disabled=move || disabled.get()
                    />
                </div>
                <div class="admin-form-group">
                    <label class="admin-form-label">"Evolves From"</label>
                    <input
                        type="text"
                        class="admin-form-input"
                        placeholder="e.g., 001"
                        prop:value=move || read(|e| e.evolves_from.clone().unwrap_or_default())
                        on:input=move |ev| write(
                            |e, v| e.evolves_from = (!v.is_empty()).then_some(v),
                            event_target_value(&ev),
                        )
                        disabled=move || disabled.get()
                    />
                </div>
            </div>
            <button
                type="button"
                class="admin-button delete"
                on:click=move |_| line.update(|entries| {
                    if index < entries.len() {
                        entries.remove(index);
                    }
                })
                disabled=move || disabled.get()
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}

//! Content Manager Page
//!
//! Category tree on the left, markdown article editor with a live preview
//! on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SaveContentArgs};
use crate::components::{ConfirmModal, LoadingIndicator};
use crate::context::{AdminPage, AppContext};
use crate::markdown::parse_markdown;
use crate::models::ContentCategory;

const DEFAULT_BODY: &str = "# New Content\n\nEnter your content here...";

#[component]
pub fn ContentManagerPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (tree, set_tree) = signal(Vec::<ContentCategory>::new());
    let (loading, set_loading) = signal(true);

    // Editor state. `editing_path` is Some((category, file)) when editing an
    // existing article, None when creating.
    let (editor_open, set_editor_open) = signal(false);
    let (editing_path, set_editing_path) = signal::<Option<(String, String)>>(None);
    let (category_path, set_category_path) = signal(String::new());
    let file_name = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let (active_tab, set_active_tab) = signal("editor".to_string());
    let (saving, set_saving) = signal(false);
    let (delete_target, set_delete_target) = signal::<Option<(String, String)>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::get_content_tree().await {
                Ok(loaded) => set_tree.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[CONTENT] Failed to load tree: {err}").into(),
                    );
                    ctx.error("Failed to load content tree");
                }
            }
            set_loading.set(false);
        });
    });

    let open_create = move |path: String| {
        set_category_path.set(path);
        set_editing_path.set(None);
        file_name.set(String::new());
        title.set(String::new());
        body.set(DEFAULT_BODY.to_string());
        set_active_tab.set("editor".to_string());
        set_editor_open.set(true);
    };

    let open_file = move |path: String, file: String| {
        spawn_local(async move {
            match api::get_content_file(&path, &file).await {
                Ok(loaded) => {
                    set_category_path.set(path.clone());
                    set_editing_path.set(Some((path, loaded.file_name.clone())));
                    file_name.set(loaded.file_name);
                    title.set(loaded.title);
                    body.set(loaded.content);
                    set_active_tab.set("editor".to_string());
                    set_editor_open.set(true);
                }
                Err(err) => ctx.error(format!("Failed to load article: {err}")),
            }
        });
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if title.get_untracked().is_empty() || file_name.get_untracked().is_empty() {
            ctx.error("Title and file name are required");
            return;
        }
        let args = SaveContentArgs {
            category_path: category_path.get_untracked(),
            file_name: file_name.get_untracked(),
            title: title.get_untracked(),
            content: body.get_untracked(),
        };
        let existing = editing_path.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = if existing.is_some() {
                api::update_content_file(&args).await
            } else {
                api::create_content_file(&args).await
            };
            match result {
                Ok(saved) => {
                    ctx.success(format!("Article {} saved successfully", saved.title));
                    set_editor_open.set(false);
                    ctx.reload();
                }
                Err(err) => ctx.error(format!("Failed to save article: {err}")),
            }
            set_saving.set(false);
        });
    };

    let confirm_delete = move |_| {
        let Some((path, file)) = delete_target.get_untracked() else {
            return;
        };
        set_delete_target.set(None);
        spawn_local(async move {
            match api::delete_content_file(&path, &file).await {
                Ok(()) => {
                    ctx.success(format!("Article {file} deleted successfully"));
                    set_editor_open.set(false);
                    ctx.reload();
                }
                Err(err) => ctx.error(format!("Failed to delete article: {err}")),
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
                <h1 class="admin-dashboard-title">"Content Management"</h1>
                <p class="admin-dashboard-subtitle">"Manage guides, articles, and other content"</p>
            </div>

            <div class="admin-actions">
                <button class="button secondary" on:click=move |_| ctx.navigate(AdminPage::Dashboard)>
                    <i class="fas fa-arrow-left"></i>
                    " Back to Dashboard"
                </button>
            </div>

            <div class="admin-content-layout">
                <aside class="admin-content-tree">
                    {move || if loading.get() {
                        view! { <LoadingIndicator message="Loading content..." /> }.into_any()
                    } else {
                        tree.get()
                            .into_iter()
                            .map(|cat| category_node(cat, open_create, open_file))
                            .collect_view()
                            .into_any()
                    }}
                </aside>

                <section class="admin-content-editor">
                    <Show when=move || !editor_open.get()>
                        <p class="admin-form-hint">"Select an article to edit, or add one to a category."</p>
                    </Show>
                    <Show when=move || editor_open.get()>
                        <form class="admin-form" on:submit=save>
                            <h2 class="admin-form-section-title">
                                {move || match editing_path.get() {
                                    Some((_, file)) => format!("Editing {file}"),
                                    None => format!("New article in {}", category_path.get()),
                                }}
                            </h2>

                            <div class="admin-form-grid">
                                <div class="admin-form-group">
                                    <label class="admin-form-label">"Title" <span class="required">" *"</span></label>
                                    <input
                                        type="text"
                                        class="admin-form-input"
                                        prop:value=move || title.get()
                                        on:input=move |ev| title.set(event_target_value(&ev))
                                        disabled=move || saving.get()
                                    />
                                </div>
                                <div class="admin-form-group">
                                    <label class="admin-form-label">"File Name" <span class="required">" *"</span></label>
                                    <input
                                        type="text"
                                        class="admin-form-input"
                                        placeholder="e.g., getting-started.md"
                                        prop:value=move || file_name.get()
                                        on:input=move |ev| file_name.set(event_target_value(&ev))
                                        disabled=move || saving.get() || editing_path.get().is_some()
                                    />
                                </div>
                            </div>

                            <div class="admin-tab-bar">
                                <button
                                    type="button"
                                    class=move || tab_class("editor")
                                    on:click=move |_| set_active_tab.set("editor".to_string())
                                >
                                    "Editor"
                                </button>
                                <button
                                    type="button"
                                    class=move || tab_class("preview")
                                    on:click=move |_| set_active_tab.set("preview".to_string())
                                >
                                    "Preview"
                                </button>
                            </div>

                            <Show when=move || active_tab.get() == "editor">
                                <textarea
                                    class="admin-form-textarea admin-markdown-input"
                                    rows="18"
                                    prop:value=move || body.get()
                                    on:input=move |ev| body.set(event_target_value(&ev))
                                    disabled=move || saving.get()
                                ></textarea>
                            </Show>
                            <Show when=move || active_tab.get() == "preview">
                                <div
                                    class="admin-markdown-preview"
                                    inner_html=move || parse_markdown(&body.get())
                                ></div>
                            </Show>

                            <div class="admin-form-actions">
                                {move || editing_path.get().map(|target| view! {
                                    <button
                                        type="button"
                                        class="button danger"
                                        on:click=move |_| set_delete_target.set(Some(target.clone()))
                                        disabled=move || saving.get()
                                    >
                                        "Delete"
                                    </button>
                                })}
                                <button
                                    type="button"
                                    class="button secondary"
                                    on:click=move |_| set_editor_open.set(false)
                                    disabled=move || saving.get()
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="button primary" disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving..." } else { "Save Article" }}
                                </button>
                            </div>
                        </form>
                    </Show>
                </section>
            </div>

            {move || delete_target.get().map(|(path, file)| view! {
                <ConfirmModal
                    title="Confirm Deletion"
                    message=format!("Are you sure you want to delete {file} from {path}?")
                    confirm_label="Delete Article"
                    on_confirm=confirm_delete
                    on_cancel=move |()| set_delete_target.set(None)
                />
            })}
        </div>
    }
}

/// Render one category with its files and subcategories, recursively.
fn category_node(
    category: ContentCategory,
    open_create: impl Fn(String) + Copy + Send + 'static,
    open_file: impl Fn(String, String) + Copy + Send + 'static,
) -> AnyView {
    let path = category.path.clone();
    let add_path = path.clone();
    view! {
        <div class="admin-content-category">
            <div class="admin-content-category-header">
                <span class="admin-content-category-name">{category.name.clone()}</span>
                <button
                    class="button secondary sm"
                    title="New article here"
                    on:click=move |_| open_create(add_path.clone())
                >
                    <i class="fas fa-plus"></i>
                </button>
            </div>

            <ul class="admin-content-files">
                {category.files.iter().map(|file| {
                    let file_path = path.clone();
                    let file_name = file.file_name.clone();
                    let title = file.title.clone();
                    view! {
                        <li>
                            <button
                                class="admin-content-file-link"
                                on:click=move |_| open_file(file_path.clone(), file_name.clone())
                            >
                                {title}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>

            {category
                .subcategories
                .into_iter()
                .map(|sub| category_node(sub, open_create, open_file))
                .collect_view()}
        </div>
    }
    .into_any()
}

//! Admin Dashboard Page
//!
//! Category-filterable grid of cards linking to every admin tool.

use leptos::prelude::*;

use crate::context::{AdminPage, AppContext};

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("all", "All Features", "fa-th"),
    ("management", "Management", "fa-cogs"),
    ("databases", "Databases", "fa-database"),
    ("items", "Items & Shops", "fa-shopping-bag"),
    ("systems", "Game Systems", "fa-gamepad"),
];

struct Tool {
    category: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    target: AdminPage,
}

fn tools() -> Vec<Tool> {
    vec![
        Tool {
            category: "management",
            title: "User Management",
            description: "Manage user accounts, permissions, and roles",
            icon: "fa-users",
            target: AdminPage::Users,
        },
        Tool {
            category: "management",
            title: "Trainer Management",
            description: "Manage trainers and their profiles",
            icon: "fa-user-friends",
            target: AdminPage::Trainers,
        },
        Tool {
            category: "databases",
            title: "Monster Database",
            description: "Manage monsters across every franchise",
            icon: "fa-dragon",
            target: AdminPage::MonsterList,
        },
        Tool {
            category: "databases",
            title: "Fakemon Database",
            description: "Manage fakemon entries in the Fakedex",
            icon: "fa-paw",
            target: AdminPage::FakemonList,
        },
        Tool {
            category: "items",
            title: "Item Management",
            description: "Manage items and bulk-import new ones",
            icon: "fa-flask",
            target: AdminPage::Items,
        },
        Tool {
            category: "items",
            title: "Shop Manager",
            description: "Manage shops, visibility, and inventory stock",
            icon: "fa-store",
            target: AdminPage::Shops,
        },
        Tool {
            category: "systems",
            title: "Boss Management",
            description: "Manage monthly bosses, rewards, and boss battles",
            icon: "fa-crown",
            target: AdminPage::Bosses,
        },
        Tool {
            category: "systems",
            title: "Content Management",
            description: "Manage guides, articles, and other content",
            icon: "fa-file-alt",
            target: AdminPage::Content,
        },
        Tool {
            category: "systems",
            title: "World Map Editor",
            description: "Manage landmasses, regions, and areas in the world map",
            icon: "fa-map",
            target: AdminPage::WorldMap,
        },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (active_category, set_active_category) = signal("all".to_string());

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1 class="admin-dashboard-title">"Admin Dashboard"</h1>
                <p class="admin-dashboard-subtitle">"Site management tools"</p>
            </div>

            <div class="admin-category-chips">
                {CATEGORIES.iter().map(|(id, label, icon)| {
                    let chip_class = move || {
                        if active_category.get() == *id {
                            "admin-category-chip active"
                        } else {
                            "admin-category-chip"
                        }
                    };
                    view! {
                        <button class=chip_class on:click=move |_| set_active_category.set(id.to_string())>
                            <i class=format!("fas {icon}")></i>
                            " "
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="admin-tool-grid">
                {move || {
                    let active = active_category.get();
                    tools()
                        .into_iter()
                        .filter(|tool| active == "all" || tool.category == active)
                        .map(|tool| {
                            let target = tool.target.clone();
                            view! {
                                <button class="admin-tool-card" on:click=move |_| ctx.navigate(target.clone())>
                                    <i class=format!("fas {} admin-tool-icon", tool.icon)></i>
                                    <h3 class="admin-tool-title">{tool.title}</h3>
                                    <p class="admin-tool-description">{tool.description}</p>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

//! Admin Frontend App
//!
//! Root component: top navigation, global status banner, and the page
//! switch.

use leptos::prelude::*;

use crate::components::StatusAlert;
use crate::context::{AdminPage, AppContext};
use crate::pages::{
    BossAdminPage, ContentManagerPage, DashboardPage, FakemonFormPage, FakemonListPage,
    ItemManagementPage, MonsterFormPage, MonsterListPage, ShopManagerPage, TrainerManagerPage,
    UserManagementPage, WorldMapPage,
};
use crate::store::{AppState, AppStore, AppStateStoreFields};
use reactive_stores::Store;

/// Top-level navigation entries; form pages are reached from their lists.
const NAV_ITEMS: &[(&str, AdminPageKind)] = &[
    ("Dashboard", AdminPageKind::Dashboard),
    ("Fakemon", AdminPageKind::FakemonList),
    ("Monsters", AdminPageKind::MonsterList),
    ("Items", AdminPageKind::Items),
    ("Shops", AdminPageKind::Shops),
    ("Bosses", AdminPageKind::Bosses),
    ("Trainers", AdminPageKind::Trainers),
    ("Users", AdminPageKind::Users),
    ("Content", AdminPageKind::Content),
    ("World Map", AdminPageKind::WorldMap),
];

/// Const-friendly stand-in for [`AdminPage`] variants without payloads.
#[derive(Clone, Copy, PartialEq)]
enum AdminPageKind {
    Dashboard,
    FakemonList,
    MonsterList,
    Items,
    Shops,
    Bosses,
    Trainers,
    Users,
    Content,
    WorldMap,
}

impl AdminPageKind {
    fn to_page(self) -> AdminPage {
        match self {
            AdminPageKind::Dashboard => AdminPage::Dashboard,
            AdminPageKind::FakemonList => AdminPage::FakemonList,
            AdminPageKind::MonsterList => AdminPage::MonsterList,
            AdminPageKind::Items => AdminPage::Items,
            AdminPageKind::Shops => AdminPage::Shops,
            AdminPageKind::Bosses => AdminPage::Bosses,
            AdminPageKind::Trainers => AdminPage::Trainers,
            AdminPageKind::Users => AdminPage::Users,
            AdminPageKind::Content => AdminPage::Content,
            AdminPageKind::WorldMap => AdminPage::WorldMap,
        }
    }

    fn matches(self, page: &AdminPage) -> bool {
        match self {
            AdminPageKind::Dashboard => matches!(page, AdminPage::Dashboard),
            AdminPageKind::FakemonList => {
                matches!(page, AdminPage::FakemonList | AdminPage::FakemonForm(_))
            }
            AdminPageKind::MonsterList => {
                matches!(page, AdminPage::MonsterList | AdminPage::MonsterForm(_))
            }
            AdminPageKind::Items => matches!(page, AdminPage::Items),
            AdminPageKind::Shops => matches!(page, AdminPage::Shops),
            AdminPageKind::Bosses => matches!(page, AdminPage::Bosses),
            AdminPageKind::Trainers => matches!(page, AdminPage::Trainers),
            AdminPageKind::Users => matches!(page, AdminPage::Users),
            AdminPageKind::Content => matches!(page, AdminPage::Content),
            AdminPageKind::WorldMap => matches!(page, AdminPage::WorldMap),
        }
    }
}

fn has_stored_token() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("token").ok().flatten())
        .is_some()
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(AdminPage::Dashboard);
    let (status, set_status) = signal(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new(
        (page, set_page),
        (status, set_status),
        (reload_trigger, set_reload_trigger),
    );
    provide_context(ctx);

    let store: AppStore = Store::new(AppState::default());
    store.authenticated().set(has_stored_token());
    provide_context(store);

    view! {
        <div class="admin-app">
            <nav class="admin-nav">
                <span class="admin-nav-brand">"Monster Admin"</span>
                {NAV_ITEMS.iter().map(|(label, kind)| {
                    let kind = *kind;
                    let item_class = move || {
                        if kind.matches(&page.get()) {
                            "admin-nav-link active"
                        } else {
                            "admin-nav-link"
                        }
                    };
                    view! {
                        <button class=item_class on:click=move |_| ctx.navigate(kind.to_page())>
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <Show when=move || !store.authenticated().get()>
                <div class="admin-alert error">
                    <i class="fas fa-lock"></i>
                    " No admin token found in local storage; requests will be rejected."
                </div>
            </Show>

            <StatusAlert />

            <main class="admin-main container">
                {move || match page.get() {
                    AdminPage::Dashboard => view! { <DashboardPage /> }.into_any(),
                    AdminPage::FakemonList => view! { <FakemonListPage /> }.into_any(),
                    AdminPage::FakemonForm(number) => {
                        view! { <FakemonFormPage number=number /> }.into_any()
                    }
                    AdminPage::MonsterList => view! { <MonsterListPage /> }.into_any(),
                    AdminPage::MonsterForm(id) => view! { <MonsterFormPage id=id /> }.into_any(),
                    AdminPage::Items => view! { <ItemManagementPage /> }.into_any(),
                    AdminPage::Shops => view! { <ShopManagerPage /> }.into_any(),
                    AdminPage::Bosses => view! { <BossAdminPage /> }.into_any(),
                    AdminPage::Trainers => view! { <TrainerManagerPage /> }.into_any(),
                    AdminPage::Users => view! { <UserManagementPage /> }.into_any(),
                    AdminPage::Content => view! { <ContentManagerPage /> }.into_any(),
                    AdminPage::WorldMap => view! { <WorldMapPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

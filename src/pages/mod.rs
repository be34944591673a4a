//! Admin Pages
//!
//! One module per admin screen.

mod bosses;
mod content;
mod dashboard;
mod fakemon_form;
mod fakemon_list;
mod items;
mod monster_form;
mod monster_list;
mod shops;
mod trainers;
mod users;
mod world_map;

pub use bosses::BossAdminPage;
pub use content::ContentManagerPage;
pub use dashboard::DashboardPage;
pub use fakemon_form::FakemonFormPage;
pub use fakemon_list::FakemonListPage;
pub use items::ItemManagementPage;
pub use monster_form::MonsterFormPage;
pub use monster_list::MonsterListPage;
pub use shops::ShopManagerPage;
pub use trainers::TrainerManagerPage;
pub use users::UserManagementPage;
pub use world_map::WorldMapPage;

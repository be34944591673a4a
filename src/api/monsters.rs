//! Monster service calls.

use super::{delete_json, get_json, get_page, post_json, put_json, ListQuery, Page};
use crate::models::Monster;

pub async fn list_monsters(query: &ListQuery) -> Result<Page<Monster>, String> {
    get_page("/monsters", query).await
}

pub async fn get_monster(id: u32) -> Result<Monster, String> {
    get_json(&format!("/monsters/{id}")).await
}

pub async fn create_monster(monster: &Monster) -> Result<Monster, String> {
    post_json("/monsters", monster).await
}

pub async fn update_monster(id: u32, monster: &Monster) -> Result<Monster, String> {
    put_json(&format!("/monsters/{id}"), monster).await
}

pub async fn delete_monster(id: u32) -> Result<(), String> {
    delete_json(&format!("/monsters/{id}")).await
}

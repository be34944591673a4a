//! Boss service calls.

use super::{delete_json, get_json, post_json, put_json};
use crate::models::Boss;

pub async fn list_bosses() -> Result<Vec<Boss>, String> {
    get_json("/bosses").await
}

pub async fn create_boss(boss: &Boss) -> Result<Boss, String> {
    post_json("/bosses", boss).await
}

pub async fn update_boss(id: u32, boss: &Boss) -> Result<Boss, String> {
    put_json(&format!("/bosses/{id}"), boss).await
}

pub async fn delete_boss(id: u32) -> Result<(), String> {
    delete_json(&format!("/bosses/{id}")).await
}

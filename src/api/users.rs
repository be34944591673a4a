//! User account service calls.

use super::{delete_json, get_json, get_page, put_json, ListQuery, Page};
use crate::models::AdminUser;
use serde::Serialize;

#[derive(Serialize)]
struct RoleArgs<'a> {
    role: &'a str,
}

pub async fn list_users(query: &ListQuery) -> Result<Page<AdminUser>, String> {
    get_page("/users", query).await
}

/// Quick username search for owner pickers.
pub async fn search_users(term: &str) -> Result<Vec<AdminUser>, String> {
    let encoded = String::from(js_sys::encode_uri_component(term));
    get_json(&format!("/users/search?q={encoded}")).await
}

pub async fn update_user_role(id: u32, role: &str) -> Result<AdminUser, String> {
    put_json(&format!("/users/{id}/role"), &RoleArgs { role }).await
}

pub async fn delete_user(id: u32) -> Result<(), String> {
    delete_json(&format!("/users/{id}")).await
}

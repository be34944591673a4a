//! Fakemon service calls.

use super::{delete_json, get_json, get_page, post_json, put_json, ListQuery, Page};
use crate::models::Fakemon;

pub async fn list_fakemon(query: &ListQuery) -> Result<Page<Fakemon>, String> {
    get_page("/fakemon", query).await
}

pub async fn get_fakemon(number: &str) -> Result<Fakemon, String> {
    get_json(&format!("/fakemon/{number}")).await
}

pub async fn create_fakemon(fakemon: &Fakemon) -> Result<Fakemon, String> {
    post_json("/fakemon", fakemon).await
}

pub async fn update_fakemon(number: &str, fakemon: &Fakemon) -> Result<Fakemon, String> {
    put_json(&format!("/fakemon/{number}"), fakemon).await
}

pub async fn delete_fakemon(number: &str) -> Result<(), String> {
    delete_json(&format!("/fakemon/{number}")).await
}

/// All type names known to the dex (for type selects and filters).
pub async fn list_fakemon_types() -> Result<Vec<String>, String> {
    get_json("/fakemon/types").await
}

/// Next unused dex number, preloaded into the create form.
pub async fn next_fakemon_number() -> Result<String, String> {
    get_json("/fakemon/next-number").await
}

//! Item service calls.

use super::{delete_json, get_page, post_json, put_json, ListQuery, Page};
use crate::models::Item;
use serde::Serialize;

#[derive(Serialize)]
struct BulkItemsBody<'a> {
    items: &'a [Item],
}

pub async fn list_items(query: &ListQuery) -> Result<Page<Item>, String> {
    get_page("/items", query).await
}

pub async fn create_item(item: &Item) -> Result<Item, String> {
    post_json("/items", item).await
}

pub async fn update_item(id: u32, item: &Item) -> Result<Item, String> {
    put_json(&format!("/items/{id}"), item).await
}

pub async fn delete_item(id: u32) -> Result<(), String> {
    delete_json(&format!("/items/{id}")).await
}

/// Create many items at once; returns how many the backend accepted.
pub async fn bulk_create_items(items: &[Item]) -> Result<u32, String> {
    post_json("/items/bulk", &BulkItemsBody { items }).await
}

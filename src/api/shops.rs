//! Shop service calls.

use super::{delete_json, get_json, post_json, put_json};
use crate::models::{Shop, ShopItem};
use serde::Serialize;

/// Restock request for one shop.
#[derive(Debug, Clone, Serialize)]
pub struct RestockArgs {
    pub category: String,
    pub count: u32,
    pub price_modifier: f64,
}

pub async fn list_shops() -> Result<Vec<Shop>, String> {
    get_json("/shops").await
}

pub async fn create_shop(shop: &Shop) -> Result<Shop, String> {
    post_json("/shops", shop).await
}

pub async fn update_shop(shop_id: &str, shop: &Shop) -> Result<Shop, String> {
    put_json(&format!("/shops/{shop_id}"), shop).await
}

pub async fn delete_shop(shop_id: &str) -> Result<(), String> {
    delete_json(&format!("/shops/{shop_id}")).await
}

pub async fn list_shop_items(shop_id: &str) -> Result<Vec<ShopItem>, String> {
    get_json(&format!("/shops/{shop_id}/items")).await
}

/// Roll fresh stock into a shop; returns the number of rows stocked.
pub async fn restock_shop(shop_id: &str, args: &RestockArgs) -> Result<u32, String> {
    post_json(&format!("/shops/{shop_id}/restock"), args).await
}

pub async fn remove_shop_item(shop_id: &str, item_row_id: u32) -> Result<(), String> {
    delete_json(&format!("/shops/{shop_id}/items/{item_row_id}")).await
}

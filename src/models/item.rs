//! Item records.

use serde::{Deserialize, Serialize};

/// Item categories known to the shop and item pages.
pub const ITEM_CATEGORIES: &[(&str, &str)] = &[
    ("balls", "Balls"),
    ("berries", "Berries"),
    ("pastries", "Pastries"),
    ("evolution", "Evolution Items"),
    ("helditems", "Held Items"),
    ("items", "General Items"),
    ("keyitems", "Key Items"),
    ("seals", "Seals"),
    ("eggs", "Eggs"),
    ("antiques", "Antiques"),
];

pub fn category_label(value: &str) -> &str {
    ITEM_CATEGORIES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub base_price: u32,
    #[serde(default)]
    pub image_url: String,
}

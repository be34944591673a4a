//! Shop and shop inventory records.

use serde::{Deserialize, Serialize};

/// When a non-constant shop is open for business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityCondition {
    /// 0 = Sunday .. 6 = Saturday; empty = every day.
    #[serde(default)]
    pub days_of_week: Vec<u8>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Chance in percent that the shop appears on an eligible day.
    #[serde(default)]
    pub random_chance: u8,
    #[serde(default = "default_true")]
    pub manually_enabled: bool,
}

impl Default for VisibilityCondition {
    fn default() -> Self {
        Self {
            days_of_week: Vec::new(),
            start_date: String::new(),
            end_date: String::new(),
            random_chance: 0,
            manually_enabled: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Shop data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub shop_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub flavor_text: String,
    #[serde(default)]
    pub banner_image: String,
    /// `None` carries every category.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_modifier")]
    pub price_modifier: f64,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub visibility: VisibilityCondition,
}

fn default_modifier() -> f64 {
    1.0
}

/// One stocked row of a shop's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: u32,
    pub shop_id: String,
    pub item_id: u32,
    pub item_name: String,
    #[serde(default)]
    pub category: String,
    pub price: u32,
    pub stock: i32,
}

pub const DAY_NAMES: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

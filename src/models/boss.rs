//! Monthly boss records.

use serde::{Deserialize, Serialize};

pub const BOSS_STATUSES: &[&str] = &["upcoming", "active", "defeated"];

/// Monster template attached to a boss (reward or grunt).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BossMonsterData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub attribute: String,
    /// Up to three species slots.
    #[serde(default)]
    pub species: Vec<String>,
    /// Up to five type slots.
    #[serde(default)]
    pub types: Vec<String>,
}

/// Boss data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub total_hp: i64,
    #[serde(default)]
    pub current_hp: i64,
    #[serde(default)]
    pub status: String,
    pub month: u8,
    pub year: u16,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reward_monster_data: BossMonsterData,
    #[serde(default)]
    pub grunt_monster_data: BossMonsterData,
}

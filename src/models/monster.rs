//! Trainer-owned monster records.

use serde::{Deserialize, Serialize};

/// Franchise filter options for the monster database pages.
pub const FRANCHISES: &[(&str, &str)] = &[
    ("pokemon", "Pokemon"),
    ("digimon", "Digimon"),
    ("yokai", "Yokai"),
    ("nexomon", "Nexomon"),
    ("pals", "Pals"),
    ("finalfantasy", "Final Fantasy"),
    ("monsterhunter", "Monster Hunter"),
    ("fakemon", "Fakemon"),
];

pub fn franchise_label(value: &str) -> &str {
    FRANCHISES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Monster data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub franchise: String,
    #[serde(default)]
    pub trainer_id: Option<u32>,
    #[serde(default = "default_level")]
    pub level: u16,
    #[serde(default)]
    pub species1: String,
    #[serde(default)]
    pub species2: String,
    #[serde(default)]
    pub species3: String,
    #[serde(default)]
    pub type1: String,
    #[serde(default)]
    pub type2: Option<String>,
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub nature: String,
    #[serde(default)]
    pub characteristic: String,
    #[serde(default)]
    pub ability1: String,
    #[serde(default)]
    pub ability2: String,
    #[serde(default)]
    pub hidden_ability: String,
    #[serde(default = "default_friendship")]
    pub friendship: u16,
    #[serde(default)]
    pub shiny: bool,
    #[serde(default)]
    pub alpha: bool,
    #[serde(default)]
    pub shadow: bool,
    #[serde(default)]
    pub paradox: bool,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_stat")]
    pub hp_total: u16,
    #[serde(default = "default_stat")]
    pub atk_total: u16,
    #[serde(default = "default_stat")]
    pub def_total: u16,
    #[serde(default = "default_stat")]
    pub spa_total: u16,
    #[serde(default = "default_stat")]
    pub spd_total: u16,
    #[serde(default = "default_stat")]
    pub spe_total: u16,
}

fn default_level() -> u16 {
    1
}

fn default_friendship() -> u16 {
    70
}

fn default_stat() -> u16 {
    50
}

impl Monster {
    pub fn species(&self) -> Vec<&str> {
        [&self.species1, &self.species2, &self.species3]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

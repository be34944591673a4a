//! World-map geography: landmass → region → area.

use serde::{Deserialize, Serialize};

/// Top level of the world map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmass {
    /// Slug identifier, e.g. "conoco-island".
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub dominant_types: Vec<String>,
    #[serde(default)]
    pub lore: String,
}

/// Region inside a landmass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub landmass_id: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub elevation: String,
    #[serde(default)]
    pub dominant_types: Vec<String>,
}

/// Named area inside a region (towns, routes, dungeons).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub region_id: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

//! Trainer records.

use serde::{Deserialize, Serialize};

/// Trainer data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: u32,
    pub name: String,
    pub user_id: u32,
    /// Owning account's display name, joined in by the list endpoint.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub monster_count: u32,
    #[serde(default)]
    pub created_at: String,
}

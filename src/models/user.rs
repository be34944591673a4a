//! User account records.

use serde::{Deserialize, Serialize};

pub const USER_ROLES: &[&str] = &["user", "moderator", "admin"];

/// User account as seen by the admin endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: String,
}

//! Content pages (guides and articles).

use serde::{Deserialize, Serialize};

/// A category node in the content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCategory {
    /// Slash-separated path, e.g. "guides/battling".
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subcategories: Vec<ContentCategory>,
    #[serde(default)]
    pub files: Vec<ContentFileMeta>,
}

/// Listing entry for one article inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFileMeta {
    pub file_name: String,
    pub title: String,
}

/// A full article, markdown body included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFile {
    pub file_name: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

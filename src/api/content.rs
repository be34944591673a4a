//! Content page service calls.

use super::{delete_json, get_json, post_json, put_json};
use crate::models::{ContentCategory, ContentFile};
use serde::Serialize;

/// Body for creating or updating an article.
#[derive(Debug, Clone, Serialize)]
pub struct SaveContentArgs {
    pub category_path: String,
    pub file_name: String,
    pub title: String,
    pub content: String,
}

/// The whole category tree, with per-category file listings.
pub async fn get_content_tree() -> Result<Vec<ContentCategory>, String> {
    get_json("/content/tree").await
}

pub async fn get_content_file(category_path: &str, file_name: &str) -> Result<ContentFile, String> {
    get_json(&format!("/content/{category_path}/{file_name}")).await
}

pub async fn create_content_file(args: &SaveContentArgs) -> Result<ContentFile, String> {
    post_json("/content", args).await
}

pub async fn update_content_file(args: &SaveContentArgs) -> Result<ContentFile, String> {
    put_json(
        &format!("/content/{}/{}", args.category_path, args.file_name),
        args,
    )
    .await
}

pub async fn delete_content_file(category_path: &str, file_name: &str) -> Result<(), String> {
    delete_json(&format!("/content/{category_path}/{file_name}")).await
}

//! REST API Client
//!
//! Per-resource service wrappers over one shared request core. Every call
//! returns `Result<T, String>` carrying the server's message on failure.

mod bosses;
mod content;
mod fakemon;
mod items;
mod monsters;
mod shops;
mod trainers;
mod upload;
mod users;
mod world_map;

pub use bosses::*;
pub use content::*;
pub use fakemon::*;
pub use items::*;
pub use monsters::*;
pub use shops::*;
pub use trainers::*;
pub use upload::*;
pub use users::*;
pub use world_map::*;

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Compile-time base URL override; the dev proxy serves `/api` by default.
const BASE_URL: &str = match option_env!("ADMIN_API_URL") {
    Some(url) => url,
    None => "/api",
};

const TOKEN_KEY: &str = "token";

// ========================
// Response Envelope
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    #[serde(default, rename = "totalItems")]
    pub total_items: u32,
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

/// One page of list results.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_pages: u32,
}

// ========================
// List Parameters
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Search/sort/filter/page parameters for list endpoints.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub sort_by: String,
    pub sort_order: SortOrder,
    /// Resource-specific filters, e.g. `("type", "Fire")`.
    pub filters: Vec<(&'static str, String)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: String::new(),
            sort_by: String::new(),
            sort_order: SortOrder::Asc,
            filters: Vec::new(),
        }
    }
}

impl ListQuery {
    /// Query-string pairs; unset parameters are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if !self.sort_by.is_empty() {
            pairs.push(("sortBy", self.sort_by.clone()));
            pairs.push(("sortOrder", self.sort_order.as_str().to_string()));
        }
        for (key, value) in &self.filters {
            if !value.is_empty() {
                pairs.push((*key, value.clone()));
            }
        }
        pairs
    }
}

// ========================
// Request Core
// ========================

fn endpoint(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

fn auth_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn dispatch<T: DeserializeOwned>(request: Request) -> Result<Envelope<T>, String> {
    let response = request.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    match response.json::<Envelope<T>>().await {
        Ok(envelope) if envelope.success => Ok(envelope),
        Ok(envelope) => Err(envelope
            .message
            .unwrap_or_else(|| format!("Request failed ({status})"))),
        Err(_) if !(200..300).contains(&status) => Err(format!("HTTP {status}")),
        Err(e) => Err(e.to_string()),
    }
}

fn take_data<T>(envelope: Envelope<T>) -> Result<T, String> {
    envelope
        .data
        .ok_or_else(|| "Empty response from API".to_string())
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let request = with_auth(Request::get(&endpoint(path)))
        .build()
        .map_err(|e| e.to_string())?;
    dispatch(request).await.and_then(take_data)
}

pub(crate) async fn get_page<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
) -> Result<Page<T>, String> {
    let pairs = query.to_pairs();
    let request = with_auth(
        Request::get(&endpoint(path)).query(pairs.iter().map(|(k, v)| (*k, v.as_str()))),
    )
    .build()
    .map_err(|e| e.to_string())?;
    let envelope = dispatch::<Vec<T>>(request).await?;
    let total_pages = envelope
        .pagination
        .as_ref()
        .map(|p| p.total_pages)
        .unwrap_or(1);
    Ok(Page {
        rows: envelope.data.unwrap_or_default(),
        total_pages,
    })
}

pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let request = with_auth(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| e.to_string())?;
    dispatch(request).await.and_then(take_data)
}

pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let request = with_auth(Request::put(&endpoint(path)))
        .json(body)
        .map_err(|e| e.to_string())?;
    dispatch(request).await.and_then(take_data)
}

pub(crate) async fn delete_json(path: &str) -> Result<(), String> {
    let request = with_auth(Request::delete(&endpoint(path)))
        .build()
        .map_err(|e| e.to_string())?;
    dispatch::<serde_json::Value>(request).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_pairs() {
        let pairs = ListQuery::default().to_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn test_full_query_pairs() {
        let query = ListQuery {
            page: 3,
            limit: 50,
            search: "char".into(),
            sort_by: "name".into(),
            sort_order: SortOrder::Desc,
            filters: vec![("type", "Fire".into()), ("attribute", String::new())],
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("search", "char".to_string())));
        assert!(pairs.contains(&("sortBy", "name".to_string())));
        assert!(pairs.contains(&("sortOrder", "desc".to_string())));
        assert!(pairs.contains(&("type", "Fire".to_string())));
        // Empty filter values never reach the query string.
        assert!(!pairs.iter().any(|(k, _)| *k == "attribute"));
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }

    #[test]
    fn test_envelope_error_message() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": false, "message": "Fakemon #001 not found"}"#)
                .unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Fakemon #001 not found"));
    }

    #[test]
    fn test_envelope_pagination() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"success": true, "data": [1, 2], "pagination": {"totalPages": 7, "totalItems": 130}}"#,
        )
        .unwrap();
        assert_eq!(envelope.pagination.unwrap().total_pages, 7);
    }
}

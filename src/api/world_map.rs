//! World-map geography service calls.

use super::{delete_json, get_json, post_json, put_json};
use crate::models::{Area, Landmass, Region};

// ========================
// Landmasses
// ========================

pub async fn list_landmasses() -> Result<Vec<Landmass>, String> {
    get_json("/world-map/landmasses").await
}

pub async fn create_landmass(landmass: &Landmass) -> Result<Landmass, String> {
    post_json("/world-map/landmasses", landmass).await
}

pub async fn update_landmass(id: &str, landmass: &Landmass) -> Result<Landmass, String> {
    put_json(&format!("/world-map/landmasses/{id}"), landmass).await
}

pub async fn delete_landmass(id: &str) -> Result<(), String> {
    delete_json(&format!("/world-map/landmasses/{id}")).await
}

// ========================
// Regions
// ========================

pub async fn list_regions(landmass_id: &str) -> Result<Vec<Region>, String> {
    get_json(&format!("/world-map/landmasses/{landmass_id}/regions")).await
}

pub async fn create_region(region: &Region) -> Result<Region, String> {
    post_json("/world-map/regions", region).await
}

pub async fn update_region(id: &str, region: &Region) -> Result<Region, String> {
    put_json(&format!("/world-map/regions/{id}"), region).await
}

pub async fn delete_region(id: &str) -> Result<(), String> {
    delete_json(&format!("/world-map/regions/{id}")).await
}

// ========================
// Areas
// ========================

pub async fn list_areas(region_id: &str) -> Result<Vec<Area>, String> {
    get_json(&format!("/world-map/regions/{region_id}/areas")).await
}

pub async fn create_area(area: &Area) -> Result<Area, String> {
    post_json("/world-map/areas", area).await
}

pub async fn update_area(id: &str, area: &Area) -> Result<Area, String> {
    put_json(&format!("/world-map/areas/{id}"), area).await
}

pub async fn delete_area(id: &str) -> Result<(), String> {
    delete_json(&format!("/world-map/areas/{id}")).await
}

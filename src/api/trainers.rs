//! Trainer service calls.

use super::{get_page, post_json, put_json, ListQuery, Page};
use crate::models::Trainer;
use serde::Serialize;

#[derive(Serialize)]
struct DeleteTrainerArgs {
    forfeit_to_bazar: bool,
}

#[derive(Serialize)]
struct ChangeOwnerArgs {
    user_id: u32,
}

pub async fn list_trainers(query: &ListQuery) -> Result<Page<Trainer>, String> {
    get_page("/trainers", query).await
}

/// Delete a trainer; optionally forfeit their monsters to the bazar instead
/// of removing them outright.
pub async fn delete_trainer(id: u32, forfeit_to_bazar: bool) -> Result<(), String> {
    post_json::<serde_json::Value, _>(
        &format!("/trainers/{id}/delete"),
        &DeleteTrainerArgs { forfeit_to_bazar },
    )
    .await
    .map(|_| ())
}

pub async fn change_trainer_owner(id: u32, user_id: u32) -> Result<Trainer, String> {
    put_json(&format!("/trainers/{id}/owner"), &ChangeOwnerArgs { user_id }).await
}

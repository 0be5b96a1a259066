//! Profile endpoints: lookups plus the edit and remove buttons.

use axum::extract::{Path, State};
use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::form::RegistrySnapshot;
use crate::models::Profile;
use crate::AppState;

/// GET /api/profiles - All profiles in insertion order.
pub async fn list_profiles(State(state): State<AppState>) -> ApiResult<Vec<Profile>> {
    let registry = state.registry.lock().await;
    success(registry.store().profiles().to_vec())
}

/// GET /api/profiles/{id} - A single profile.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Profile> {
    let registry = state.registry.lock().await;
    let profile = registry
        .store()
        .find_by_id(&id)
        .cloned()
        .ok_or_else(|| AppError::profile_not_found(&id))?;
    success(profile)
}

/// POST /api/profiles/{id}/edit - Load a profile into the form for editing.
pub async fn edit_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RegistrySnapshot> {
    let mut registry = state.registry.lock().await;
    registry.edit(&id)?;
    success(registry.snapshot())
}

/// Result of a remove button press.
#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    /// The deleted record, or null when it was already gone.
    pub removed: Option<Profile>,
    pub state: RegistrySnapshot,
}

/// DELETE /api/profiles/{id} - Remove a profile.
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RemoveResponse> {
    let mut registry = state.registry.lock().await;
    let removed = registry.remove(&id).await?;
    success(RemoveResponse {
        removed,
        state: registry.snapshot(),
    })
}

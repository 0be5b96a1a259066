//! Whole-page state and search endpoints.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::form::RegistrySnapshot;
use crate::view::ViewRenderer;
use crate::AppState;

/// GET /api/registry - Current form, views and announcement.
pub async fn get_registry(State(state): State<AppState>) -> ApiResult<RegistrySnapshot> {
    let registry = state.registry.lock().await;
    success(registry.snapshot())
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search term; blank shows every profile.
    #[serde(default)]
    pub q: String,
}

/// GET /api/search - Filter both views by the search term.
pub async fn search_profiles(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<ViewRenderer> {
    let mut registry = state.registry.lock().await;
    registry.search(&params.q);
    success(registry.views().clone())
}

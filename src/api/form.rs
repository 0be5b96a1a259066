//! Form endpoints: input, blur validation and submit.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiResponse, ApiResult};
use crate::errors::{AppError, ErrorDetails, ErrorResponse};
use crate::form::{FieldError, RegistrySnapshot, SubmitOutcome};
use crate::models::{FieldName, ProfileFields};
use crate::AppState;

/// Request body for a field input event.
#[derive(Debug, Deserialize)]
pub struct FieldInput {
    pub value: String,
}

/// PUT /api/form/{field} - Set one field's value.
pub async fn set_field(
    State(state): State<AppState>,
    Path(field): Path<FieldName>,
    Json(input): Json<FieldInput>,
) -> ApiResult<ProfileFields> {
    let mut registry = state.registry.lock().await;
    registry.input(field, input.value);
    success(registry.values().clone())
}

#[derive(Debug, Serialize)]
pub struct FieldValidation {
    pub field: FieldName,
    pub error: Option<FieldError>,
}

/// POST /api/form/{field}/validate - Validate one field (blur).
pub async fn validate_field(
    State(state): State<AppState>,
    Path(field): Path<FieldName>,
) -> ApiResult<FieldValidation> {
    let mut registry = state.registry.lock().await;
    let error = registry.validate_field(field);
    success(FieldValidation { field, error })
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    #[serde(flatten)]
    pub outcome: SubmitOutcome,
    pub state: RegistrySnapshot,
}

/// A failed submit. The error envelope also carries the registry state,
/// since a failed update leaves edit mode and resets the form.
#[derive(Debug)]
pub struct SubmitError {
    pub error: AppError,
    pub state: RegistrySnapshot,
}

#[derive(Debug, Serialize)]
struct SubmitErrorBody {
    success: bool,
    error: ErrorDetails,
    state: RegistrySnapshot,
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let ErrorResponse { success, error } = ErrorResponse::new(&self.error);
        let body = SubmitErrorBody {
            success,
            error,
            state: self.state,
        };
        (status, Json(body)).into_response()
    }
}

/// POST /api/form/submit - Submit the form, optionally filling every field first.
pub async fn submit_form(
    State(state): State<AppState>,
    body: Option<Json<ProfileFields>>,
) -> Result<ApiResponse<SubmitResponse>, SubmitError> {
    let mut registry = state.registry.lock().await;
    if let Some(Json(values)) = body {
        registry.fill(values);
    }
    let outcome = match registry.submit().await {
        Ok(outcome) => outcome,
        Err(error) => {
            return Err(SubmitError {
                error,
                state: registry.snapshot(),
            })
        }
    };
    Ok(ApiResponse::new(SubmitResponse {
        outcome,
        state: registry.snapshot(),
    }))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use serde_json::Value;

    use super::*;
    use crate::form::FormController;
    use crate::models::FormOptions;
    use crate::registry::ProfileStore;
    use crate::storage::{MemoryStore, ProfilePersistence};

    #[tokio::test]
    async fn test_submit_error_carries_registry_state() {
        let store = ProfileStore::open(
            ProfilePersistence::new(MemoryStore::new(), "studentProfiles"),
            "https://via.placeholder.com/100",
        )
        .await
        .unwrap();
        let options = FormOptions {
            programmes: vec!["CS".into()],
            years: vec!["1".into()],
        };
        let form = FormController::new(store, options, Duration::from_secs(1));

        let response = SubmitError {
            error: AppError::profile_not_found("42"),
            state: form.snapshot(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["state"]["form"]["mode"], "create");
        assert_eq!(body["state"]["form"]["submitLabel"], "Register Student");
    }
}

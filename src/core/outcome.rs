use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::types::ApiResponse;

/// Result of a create operation.
///
/// Expected business conditions are values, not errors: callers branch on a
/// closed set instead of catching anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Entity persisted; carries the system-assigned identifier.
    Success(Uuid),
    /// A uniqueness precondition failed; recoverable with different input.
    Conflict,
    /// The persistence layer failed; detail stays server-side.
    ErrorInServer,
}

/// Result of an update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Success,
    /// The addressed entity does not exist.
    NotAllowed,
    ErrorInServer,
}

/// Result of a deactivate (soft delete) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Success,
    /// The addressed entity does not exist.
    NotAllowed,
    ErrorInServer,
}

/// Body of a successful create response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub id: Uuid,
}

fn server_error() -> Response {
    let body = Json(ApiResponse::<()>::error(
        Some("Internal server error".to_string()),
        None,
    ));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

impl IntoResponse for CreateOutcome {
    fn into_response(self) -> Response {
        match self {
            CreateOutcome::Success(id) => {
                let body = Json(ApiResponse::success(
                    Some(CreatedResponse { id }),
                    Some("Created".to_string()),
                    None,
                ));
                (StatusCode::CREATED, body).into_response()
            }
            CreateOutcome::Conflict => {
                let body = Json(ApiResponse::<()>::error(
                    Some("Resource already exists".to_string()),
                    None,
                ));
                (StatusCode::CONFLICT, body).into_response()
            }
            CreateOutcome::ErrorInServer => server_error(),
        }
    }
}

impl IntoResponse for UpdateOutcome {
    fn into_response(self) -> Response {
        match self {
            UpdateOutcome::Success => {
                let body = Json(ApiResponse::<()>::success(
                    None,
                    Some("Updated".to_string()),
                    None,
                ));
                (StatusCode::OK, body).into_response()
            }
            UpdateOutcome::NotAllowed => {
                let body = Json(ApiResponse::<()>::error(
                    Some("Operation not allowed for this resource".to_string()),
                    None,
                ));
                (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
            }
            UpdateOutcome::ErrorInServer => server_error(),
        }
    }
}

impl IntoResponse for DeleteOutcome {
    fn into_response(self) -> Response {
        match self {
            DeleteOutcome::Success => {
                let body = Json(ApiResponse::<()>::success(
                    None,
                    Some("Deactivated".to_string()),
                    None,
                ));
                (StatusCode::OK, body).into_response()
            }
            DeleteOutcome::NotAllowed => {
                let body = Json(ApiResponse::<()>::error(
                    Some("Operation not allowed for this resource".to_string()),
                    None,
                ));
                (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
            }
            DeleteOutcome::ErrorInServer => server_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_outcome_status_codes() {
        assert_eq!(
            CreateOutcome::Success(Uuid::new_v4()).into_response().status(),
            StatusCode::CREATED
        );
        assert_eq!(
            CreateOutcome::Conflict.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CreateOutcome::ErrorInServer.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn update_outcome_status_codes() {
        assert_eq!(
            UpdateOutcome::Success.into_response().status(),
            StatusCode::OK
        );
        assert_eq!(
            UpdateOutcome::NotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            UpdateOutcome::ErrorInServer.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn delete_outcome_status_codes() {
        assert_eq!(
            DeleteOutcome::Success.into_response().status(),
            StatusCode::OK
        );
        assert_eq!(
            DeleteOutcome::NotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            DeleteOutcome::ErrorInServer.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

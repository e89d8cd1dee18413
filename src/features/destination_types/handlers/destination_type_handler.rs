use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::outcome::CreatedResponse;
use crate::core::service::CrudService;
use crate::features::destination_types::dtos::{CreateDestinationTypeDto, DestinationTypeResponseDto, UpdateDestinationTypeDto};
use crate::features::destination_types::models::DestinationType;
use crate::shared::types::{ApiResponse, Meta};

/// List all destination types
#[utoipa::path(
    get,
    path = "/api/destination-types",
    responses(
        (status = 200, description = "List of destination types", body = ApiResponse<Vec<DestinationTypeResponseDto>>),
    ),
    tag = "destination_types"
)]
pub async fn list_destination_types(
    State(service): State<Arc<CrudService<DestinationType>>>,
) -> Result<Json<ApiResponse<Vec<DestinationTypeResponseDto>>>> {
    let destination_types: Vec<DestinationTypeResponseDto> = service.get_all().await?;
    let total = destination_types.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(destination_types),
        None,
        Some(Meta { total }),
    )))
}

/// Get destination type by ID
#[utoipa::path(
    get,
    path = "/api/destination-types/{id}",
    params(
        ("id" = Uuid, Path, description = "Destination type ID")
    ),
    responses(
        (status = 200, description = "Destination type found", body = ApiResponse<DestinationTypeResponseDto>),
        (status = 404, description = "Destination type not found")
    ),
    tag = "destination_types"
)]
pub async fn get_destination_type(
    State(service): State<Arc<CrudService<DestinationType>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DestinationTypeResponseDto>>> {
    let destination_type: Option<DestinationTypeResponseDto> = service.get_by_id(id).await?;
    destination_type
        .map(|h| Json(ApiResponse::success(Some(h), None, None)))
        .ok_or_else(|| AppError::NotFound(format!("Destination type '{}' not found", id)))
}

/// Create a new destination type
#[utoipa::path(
    post,
    path = "/api/destination-types",
    request_body = CreateDestinationTypeDto,
    responses(
        (status = 201, description = "Destination type created", body = ApiResponse<CreatedResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Destination type name already exists"),
        (status = 500, description = "Server error")
    ),
    tag = "destination_types"
)]
pub async fn create_destination_type(
    State(service): State<Arc<CrudService<DestinationType>>>,
    AppJson(dto): AppJson<CreateDestinationTypeDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.create(&dto).await.into_response())
}

/// Update a destination type, addressed by the ID in the body
#[utoipa::path(
    put,
    path = "/api/destination-types",
    request_body = UpdateDestinationTypeDto,
    responses(
        (status = 200, description = "Destination type updated"),
        (status = 400, description = "Validation error"),
        (status = 405, description = "Destination type does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "destination_types"
)]
pub async fn update_destination_type(
    State(service): State<Arc<CrudService<DestinationType>>>,
    AppJson(dto): AppJson<UpdateDestinationTypeDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.update(&dto).await.into_response())
}

/// Deactivate a destination type (soft delete)
#[utoipa::path(
    delete,
    path = "/api/destination-types/{id}",
    params(
        ("id" = Uuid, Path, description = "Destination type ID")
    ),
    responses(
        (status = 200, description = "Destination type deactivated"),
        (status = 405, description = "Destination type does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "destination_types"
)]
pub async fn deactivate_destination_type(
    State(service): State<Arc<CrudService<DestinationType>>>,
    Path(id): Path<Uuid>,
) -> Response {
    service.deactivate(id).await.into_response()
}


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
use crate::features::destinations::dtos::{
    CreateDestinationDto, DestinationResponseDto, UpdateDestinationDto,
};
use crate::features::destinations::models::Destination;
use crate::shared::types::{ApiResponse, Meta};

/// List all destinations
#[utoipa::path(
    get,
    path = "/api/destinations",
    responses(
        (status = 200, description = "List of destinations", body = ApiResponse<Vec<DestinationResponseDto>>),
    ),
    tag = "destinations"
)]
pub async fn list_destinations(
    State(service): State<Arc<CrudService<Destination>>>,
) -> Result<Json<ApiResponse<Vec<DestinationResponseDto>>>> {
    let destinations: Vec<DestinationResponseDto> = service.get_all().await?;
    let total = destinations.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(destinations),
        None,
        Some(Meta { total }),
    )))
}

/// Get destination by ID
#[utoipa::path(
    get,
    path = "/api/destinations/{id}",
    params(
        ("id" = Uuid, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Destination found", body = ApiResponse<DestinationResponseDto>),
        (status = 404, description = "Destination not found")
    ),
    tag = "destinations"
)]
pub async fn get_destination(
    State(service): State<Arc<CrudService<Destination>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DestinationResponseDto>>> {
    let destination: Option<DestinationResponseDto> = service.get_by_id(id).await?;
    destination
        .map(|d| Json(ApiResponse::success(Some(d), None, None)))
        .ok_or_else(|| AppError::NotFound(format!("Destination '{}' not found", id)))
}

/// Create a new destination
#[utoipa::path(
    post,
    path = "/api/destinations",
    request_body = CreateDestinationDto,
    responses(
        (status = 201, description = "Destination created", body = ApiResponse<CreatedResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Destination name already exists"),
        (status = 500, description = "Server error")
    ),
    tag = "destinations"
)]
pub async fn create_destination(
    State(service): State<Arc<CrudService<Destination>>>,
    AppJson(dto): AppJson<CreateDestinationDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.create(&dto).await.into_response())
}

/// Update a destination, addressed by the ID in the body
#[utoipa::path(
    put,
    path = "/api/destinations",
    request_body = UpdateDestinationDto,
    responses(
        (status = 200, description = "Destination updated"),
        (status = 400, description = "Validation error"),
        (status = 405, description = "Destination does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "destinations"
)]
pub async fn update_destination(
    State(service): State<Arc<CrudService<Destination>>>,
    AppJson(dto): AppJson<UpdateDestinationDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.update(&dto).await.into_response())
}

/// Deactivate a destination (soft delete)
#[utoipa::path(
    delete,
    path = "/api/destinations/{id}",
    params(
        ("id" = Uuid, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Destination deactivated"),
        (status = 405, description = "Destination does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "destinations"
)]
pub async fn deactivate_destination(
    State(service): State<Arc<CrudService<Destination>>>,
    Path(id): Path<Uuid>,
) -> Response {
    service.deactivate(id).await.into_response()
}

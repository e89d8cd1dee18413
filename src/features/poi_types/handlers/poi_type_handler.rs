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
use crate::features::poi_types::dtos::{CreatePoiTypeDto, PoiTypeResponseDto, UpdatePoiTypeDto};
use crate::features::poi_types::models::PoiType;
use crate::shared::types::{ApiResponse, Meta};

/// List all POI types
#[utoipa::path(
    get,
    path = "/api/poi-types",
    responses(
        (status = 200, description = "List of POI types", body = ApiResponse<Vec<PoiTypeResponseDto>>),
    ),
    tag = "poi_types"
)]
pub async fn list_poi_types(
    State(service): State<Arc<CrudService<PoiType>>>,
) -> Result<Json<ApiResponse<Vec<PoiTypeResponseDto>>>> {
    let poi_types: Vec<PoiTypeResponseDto> = service.get_all().await?;
    let total = poi_types.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(poi_types),
        None,
        Some(Meta { total }),
    )))
}

/// Get POI type by ID
#[utoipa::path(
    get,
    path = "/api/poi-types/{id}",
    params(
        ("id" = Uuid, Path, description = "POI type ID")
    ),
    responses(
        (status = 200, description = "POI type found", body = ApiResponse<PoiTypeResponseDto>),
        (status = 404, description = "POI type not found")
    ),
    tag = "poi_types"
)]
pub async fn get_poi_type(
    State(service): State<Arc<CrudService<PoiType>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PoiTypeResponseDto>>> {
    let poi_type: Option<PoiTypeResponseDto> = service.get_by_id(id).await?;
    poi_type
        .map(|h| Json(ApiResponse::success(Some(h), None, None)))
        .ok_or_else(|| AppError::NotFound(format!("POI type '{}' not found", id)))
}

/// Create a new POI type
#[utoipa::path(
    post,
    path = "/api/poi-types",
    request_body = CreatePoiTypeDto,
    responses(
        (status = 201, description = "POI type created", body = ApiResponse<CreatedResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "POI type name already exists"),
        (status = 500, description = "Server error")
    ),
    tag = "poi_types"
)]
pub async fn create_poi_type(
    State(service): State<Arc<CrudService<PoiType>>>,
    AppJson(dto): AppJson<CreatePoiTypeDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.create(&dto).await.into_response())
}

/// Update a POI type, addressed by the ID in the body
#[utoipa::path(
    put,
    path = "/api/poi-types",
    request_body = UpdatePoiTypeDto,
    responses(
        (status = 200, description = "POI type updated"),
        (status = 400, description = "Validation error"),
        (status = 405, description = "POI type does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "poi_types"
)]
pub async fn update_poi_type(
    State(service): State<Arc<CrudService<PoiType>>>,
    AppJson(dto): AppJson<UpdatePoiTypeDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.update(&dto).await.into_response())
}

/// Deactivate a POI type (soft delete)
#[utoipa::path(
    delete,
    path = "/api/poi-types/{id}",
    params(
        ("id" = Uuid, Path, description = "POI type ID")
    ),
    responses(
        (status = 200, description = "POI type deactivated"),
        (status = 405, description = "POI type does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "poi_types"
)]
pub async fn deactivate_poi_type(
    State(service): State<Arc<CrudService<PoiType>>>,
    Path(id): Path<Uuid>,
) -> Response {
    service.deactivate(id).await.into_response()
}


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
use crate::features::pois::dtos::{CreatePoiDto, PoiResponseDto, UpdatePoiDto};
use crate::features::pois::models::Poi;
use crate::shared::types::{ApiResponse, Meta};

/// List all POIs
#[utoipa::path(
    get,
    path = "/api/pois",
    responses(
        (status = 200, description = "List of POIs", body = ApiResponse<Vec<PoiResponseDto>>),
    ),
    tag = "pois"
)]
pub async fn list_pois(
    State(service): State<Arc<CrudService<Poi>>>,
) -> Result<Json<ApiResponse<Vec<PoiResponseDto>>>> {
    let pois: Vec<PoiResponseDto> = service.get_all().await?;
    let total = pois.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(pois),
        None,
        Some(Meta { total }),
    )))
}

/// Get POI by ID
#[utoipa::path(
    get,
    path = "/api/pois/{id}",
    params(
        ("id" = Uuid, Path, description = "POI ID")
    ),
    responses(
        (status = 200, description = "POI found", body = ApiResponse<PoiResponseDto>),
        (status = 404, description = "POI not found")
    ),
    tag = "pois"
)]
pub async fn get_poi(
    State(service): State<Arc<CrudService<Poi>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PoiResponseDto>>> {
    let poi: Option<PoiResponseDto> = service.get_by_id(id).await?;
    poi.map(|p| Json(ApiResponse::success(Some(p), None, None)))
        .ok_or_else(|| AppError::NotFound(format!("POI '{}' not found", id)))
}

/// Create a new POI
#[utoipa::path(
    post,
    path = "/api/pois",
    request_body = CreatePoiDto,
    responses(
        (status = 201, description = "POI created", body = ApiResponse<CreatedResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "POI name already exists"),
        (status = 500, description = "Server error")
    ),
    tag = "pois"
)]
pub async fn create_poi(
    State(service): State<Arc<CrudService<Poi>>>,
    AppJson(dto): AppJson<CreatePoiDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.create(&dto).await.into_response())
}

/// Update a POI, addressed by the ID in the body
#[utoipa::path(
    put,
    path = "/api/pois",
    request_body = UpdatePoiDto,
    responses(
        (status = 200, description = "POI updated"),
        (status = 400, description = "Validation error"),
        (status = 405, description = "POI does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "pois"
)]
pub async fn update_poi(
    State(service): State<Arc<CrudService<Poi>>>,
    AppJson(dto): AppJson<UpdatePoiDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.update(&dto).await.into_response())
}

/// Deactivate a POI (soft delete)
#[utoipa::path(
    delete,
    path = "/api/pois/{id}",
    params(
        ("id" = Uuid, Path, description = "POI ID")
    ),
    responses(
        (status = 200, description = "POI deactivated"),
        (status = 405, description = "POI does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "pois"
)]
pub async fn deactivate_poi(
    State(service): State<Arc<CrudService<Poi>>>,
    Path(id): Path<Uuid>,
) -> Response {
    service.deactivate(id).await.into_response()
}

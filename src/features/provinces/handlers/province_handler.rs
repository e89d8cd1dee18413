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
use crate::features::provinces::dtos::{CreateProvinceDto, ProvinceResponseDto, UpdateProvinceDto};
use crate::features::provinces::models::Province;
use crate::shared::types::{ApiResponse, Meta};

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/provinces",
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<ProvinceResponseDto>>),
    ),
    tag = "provinces"
)]
pub async fn list_provinces(
    State(service): State<Arc<CrudService<Province>>>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces: Vec<ProvinceResponseDto> = service.get_all().await?;
    let total = provinces.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(provinces),
        None,
        Some(Meta { total }),
    )))
}

/// Get province by ID
#[utoipa::path(
    get,
    path = "/api/provinces/{id}",
    params(
        ("id" = Uuid, Path, description = "Province ID")
    ),
    responses(
        (status = 200, description = "Province found", body = ApiResponse<ProvinceResponseDto>),
        (status = 404, description = "Province not found")
    ),
    tag = "provinces"
)]
pub async fn get_province(
    State(service): State<Arc<CrudService<Province>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProvinceResponseDto>>> {
    let province: Option<ProvinceResponseDto> = service.get_by_id(id).await?;
    province
        .map(|h| Json(ApiResponse::success(Some(h), None, None)))
        .ok_or_else(|| AppError::NotFound(format!("Province '{}' not found", id)))
}

/// Create a new province
#[utoipa::path(
    post,
    path = "/api/provinces",
    request_body = CreateProvinceDto,
    responses(
        (status = 201, description = "Province created", body = ApiResponse<CreatedResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Province name already exists"),
        (status = 500, description = "Server error")
    ),
    tag = "provinces"
)]
pub async fn create_province(
    State(service): State<Arc<CrudService<Province>>>,
    AppJson(dto): AppJson<CreateProvinceDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.create(&dto).await.into_response())
}

/// Update a province, addressed by the ID in the body
#[utoipa::path(
    put,
    path = "/api/provinces",
    request_body = UpdateProvinceDto,
    responses(
        (status = 200, description = "Province updated"),
        (status = 400, description = "Validation error"),
        (status = 405, description = "Province does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "provinces"
)]
pub async fn update_province(
    State(service): State<Arc<CrudService<Province>>>,
    AppJson(dto): AppJson<UpdateProvinceDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.update(&dto).await.into_response())
}

/// Deactivate a province (soft delete)
#[utoipa::path(
    delete,
    path = "/api/provinces/{id}",
    params(
        ("id" = Uuid, Path, description = "Province ID")
    ),
    responses(
        (status = 200, description = "Province deactivated"),
        (status = 405, description = "Province does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "provinces"
)]
pub async fn deactivate_province(
    State(service): State<Arc<CrudService<Province>>>,
    Path(id): Path<Uuid>,
) -> Response {
    service.deactivate(id).await.into_response()
}


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
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::models::User;
use crate::shared::types::{ApiResponse, Meta};

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponseDto>>),
    ),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<CrudService<User>>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users: Vec<UserResponseDto> = service.get_all().await?;
    let total = users.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(users),
        None,
        Some(Meta { total }),
    )))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(service): State<Arc<CrudService<User>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user: Option<UserResponseDto> = service.get_by_id(id).await?;
    user.map(|u| Json(ApiResponse::success(Some(u), None, None)))
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<CreatedResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Server error")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<CrudService<User>>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.create(&dto).await.into_response())
}

/// Update an account (password, names and phone only)
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Validation error"),
        (status = 405, description = "User does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(service): State<Arc<CrudService<User>>>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.update(&dto).await.into_response())
}

/// Deactivate an account (soft delete)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deactivated"),
        (status = 405, description = "User does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "users"
)]
pub async fn deactivate_user(
    State(service): State<Arc<CrudService<User>>>,
    Path(id): Path<Uuid>,
) -> Response {
    service.deactivate(id).await.into_response()
}

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
use crate::features::hashtags::dtos::{CreateHashtagDto, HashtagResponseDto, UpdateHashtagDto};
use crate::features::hashtags::models::Hashtag;
use crate::shared::types::{ApiResponse, Meta};

/// List all hashtags
#[utoipa::path(
    get,
    path = "/api/hashtags",
    responses(
        (status = 200, description = "List of hashtags", body = ApiResponse<Vec<HashtagResponseDto>>),
    ),
    tag = "hashtags"
)]
pub async fn list_hashtags(
    State(service): State<Arc<CrudService<Hashtag>>>,
) -> Result<Json<ApiResponse<Vec<HashtagResponseDto>>>> {
    let hashtags: Vec<HashtagResponseDto> = service.get_all().await?;
    let total = hashtags.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(hashtags),
        None,
        Some(Meta { total }),
    )))
}

/// Get hashtag by ID
#[utoipa::path(
    get,
    path = "/api/hashtags/{id}",
    params(
        ("id" = Uuid, Path, description = "Hashtag ID")
    ),
    responses(
        (status = 200, description = "Hashtag found", body = ApiResponse<HashtagResponseDto>),
        (status = 404, description = "Hashtag not found")
    ),
    tag = "hashtags"
)]
pub async fn get_hashtag(
    State(service): State<Arc<CrudService<Hashtag>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<HashtagResponseDto>>> {
    let hashtag: Option<HashtagResponseDto> = service.get_by_id(id).await?;
    hashtag
        .map(|h| Json(ApiResponse::success(Some(h), None, None)))
        .ok_or_else(|| AppError::NotFound(format!("Hashtag '{}' not found", id)))
}

/// Create a new hashtag
#[utoipa::path(
    post,
    path = "/api/hashtags",
    request_body = CreateHashtagDto,
    responses(
        (status = 201, description = "Hashtag created", body = ApiResponse<CreatedResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Hashtag name already exists"),
        (status = 500, description = "Server error")
    ),
    tag = "hashtags"
)]
pub async fn create_hashtag(
    State(service): State<Arc<CrudService<Hashtag>>>,
    AppJson(dto): AppJson<CreateHashtagDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.create(&dto).await.into_response())
}

/// Update a hashtag, addressed by the ID in the body
#[utoipa::path(
    put,
    path = "/api/hashtags",
    request_body = UpdateHashtagDto,
    responses(
        (status = 200, description = "Hashtag updated"),
        (status = 400, description = "Validation error"),
        (status = 405, description = "Hashtag does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "hashtags"
)]
pub async fn update_hashtag(
    State(service): State<Arc<CrudService<Hashtag>>>,
    AppJson(dto): AppJson<UpdateHashtagDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(service.update(&dto).await.into_response())
}

/// Deactivate a hashtag (soft delete)
#[utoipa::path(
    delete,
    path = "/api/hashtags/{id}",
    params(
        ("id" = Uuid, Path, description = "Hashtag ID")
    ),
    responses(
        (status = 200, description = "Hashtag deactivated"),
        (status = 405, description = "Hashtag does not exist"),
        (status = 500, description = "Server error")
    ),
    tag = "hashtags"
)]
pub async fn deactivate_hashtag(
    State(service): State<Arc<CrudService<Hashtag>>>,
    Path(id): Path<Uuid>,
) -> Response {
    service.deactivate(id).await.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapper::Mapper;
    use crate::core::repository::EntityRepository;
    use crate::features::hashtags::{mapping, routes};
    use crate::shared::test_helpers::InMemoryRepository;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn test_server() -> TestServer {
        let mut mapper = Mapper::new();
        mapping::register_mappings(&mut mapper);
        let repo = Arc::new(InMemoryRepository::new(|a: &Hashtag, b: &Hashtag| {
            a.name == b.name
        }));
        let service = Arc::new(CrudService::new(
            repo as Arc<dyn EntityRepository<Hashtag>>,
            Arc::new(mapper),
        ));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn post_creates_and_returns_201_with_assigned_id() {
        let server = test_server();

        let response = server
            .post("/api/hashtags")
            .json(&json!({ "name": "beach" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: ApiResponse<CreatedResponse> = response.json();
        let id = body.data.unwrap().id;

        let fetched = server.get(&format!("/api/hashtags/{}", id)).await;
        fetched.assert_status_ok();
        let fetched: ApiResponse<HashtagResponseDto> = fetched.json();
        assert_eq!(fetched.data.unwrap().name, "beach");
    }

    #[tokio::test]
    async fn duplicate_post_returns_409() {
        let server = test_server();

        server
            .post("/api/hashtags")
            .json(&json!({ "name": "temple" }))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/hashtags")
            .json(&json!({ "name": "temple" }))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn invalid_name_returns_400() {
        let server = test_server();

        server
            .post("/api/hashtags")
            .json(&json!({ "name": "not a hashtag" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_of_unknown_id_returns_404() {
        let server = test_server();

        server
            .get(&format!("/api/hashtags/{}", Uuid::new_v4()))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn put_of_unknown_id_returns_405() {
        let server = test_server();

        server
            .put("/api/hashtags")
            .json(&json!({ "id": Uuid::new_v4(), "name": "ghost" }))
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn delete_soft_deletes_and_unknown_id_returns_405() {
        let server = test_server();

        let created = server
            .post("/api/hashtags")
            .json(&json!({ "name": "sunset" }))
            .await;
        let body: ApiResponse<CreatedResponse> = created.json();
        let id = body.data.unwrap().id;

        server
            .delete(&format!("/api/hashtags/{}", id))
            .await
            .assert_status_ok();

        // Still retrievable, now unavailable
        let fetched = server.get(&format!("/api/hashtags/{}", id)).await;
        fetched.assert_status_ok();
        let fetched: ApiResponse<HashtagResponseDto> = fetched.json();
        assert_eq!(
            fetched.data.unwrap().status,
            crate::shared::status::EntityStatus::Unavailable
        );

        server
            .delete(&format!("/api/hashtags/{}", Uuid::new_v4()))
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn list_on_empty_store_returns_200_with_empty_array() {
        let server = test_server();

        let response = server.get("/api/hashtags").await;
        response.assert_status_ok();
        let body: ApiResponse<Vec<HashtagResponseDto>> = response.json();
        assert_eq!(body.data.unwrap().len(), 0);
        assert_eq!(body.meta.unwrap().total, 0);
    }
}

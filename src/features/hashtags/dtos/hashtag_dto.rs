use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::status::EntityStatus;
use crate::shared::validation::HASHTAG_REGEX;

/// Request DTO for creating a hashtag
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHashtagDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        regex(path = "*HASHTAG_REGEX", message = "Name must be alphanumeric or underscore")
    )]
    pub name: String,
}

/// Request DTO for updating a hashtag, addressed by `id`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHashtagDto {
    pub id: Uuid,

    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        regex(path = "*HASHTAG_REGEX", message = "Name must be alphanumeric or underscore")
    )]
    pub name: String,
}

/// Response DTO for hashtag
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HashtagResponseDto {
    pub id: Uuid,
    pub name: String,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::status::EntityStatus;

/// A coordinate pair as supplied by clients: two named scalar fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesDto {
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be in [-180, 180]"))]
    pub longitude: f64,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be in [-90, 90]"))]
    pub latitude: f64,
}

/// Request DTO for creating a destination
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestinationDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    pub province_id: Uuid,

    pub destination_type_id: Uuid,

    #[validate(nested)]
    pub location: CoordinatesDto,
}

/// Request DTO for updating a destination, addressed by `id`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDestinationDto {
    pub id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    pub province_id: Uuid,

    pub destination_type_id: Uuid,

    #[validate(nested)]
    pub location: CoordinatesDto,
}

/// Response DTO for destination
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationResponseDto {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub province_id: Uuid,
    pub destination_type_id: Uuid,
    pub location: CoordinatesDto,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// Lifecycle status shared by every catalog entity, matching the
/// `entity_status` database enum.
///
/// Entities are created `Available` and soft-deleted to `Unavailable`; rows
/// are never physically removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "entity_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Available,
    Unavailable,
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityStatus::Available => write!(f, "available"),
            EntityStatus::Unavailable => write!(f, "unavailable"),
        }
    }
}

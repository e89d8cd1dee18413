use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::repository::CatalogEntity;
use crate::shared::status::EntityStatus;

/// Database model for POI type
#[derive(Debug, Clone, FromRow)]
pub struct PoiType {
    pub id: Uuid,
    pub name: String,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntity for PoiType {
    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> EntityStatus {
        self.status
    }

    fn set_status(&mut self, status: EntityStatus) {
        self.status = status;
    }
}

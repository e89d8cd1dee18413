use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::repository::CatalogEntity;
use crate::shared::status::EntityStatus;

/// Database model for POI
#[derive(Debug, Clone, FromRow)]
pub struct Poi {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub destination_id: Uuid,
    pub poi_type_id: Uuid,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntity for Poi {
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

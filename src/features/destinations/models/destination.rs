use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

use crate::core::repository::CatalogEntity;
use crate::shared::geo::GeoPoint;
use crate::shared::status::EntityStatus;

/// Database model for destination
#[derive(Debug, Clone)]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub province_id: Uuid,
    pub destination_type_id: Uuid,
    pub location: GeoPoint,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// The point is stored as two scalar columns; fold them back into one
// geometry here so the rest of the code never touches the raw axes.
impl FromRow<'_, PgRow> for Destination {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            province_id: row.try_get("province_id")?,
            destination_type_id: row.try_get("destination_type_id")?,
            location: GeoPoint {
                x: row.try_get("location_x")?,
                y: row.try_get("location_y")?,
            },
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl CatalogEntity for Destination {
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

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::repository::{
    is_unique_violation, EntityRepository, InsertOutcome, PersistOutcome,
};
use crate::features::destinations::models::Destination;
use crate::shared::status::EntityStatus;

/// Postgres persistence for destinations
pub struct PgDestinationRepository {
    pool: PgPool,
}

impl PgDestinationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository<Destination> for PgDestinationRepository {
    async fn insert(&self, entity: &Destination) -> Result<InsertOutcome, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO destinations
                (id, name, description, province_id, destination_type_id,
                 location_x, location_y, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.province_id)
        .bind(entity.destination_type_id)
        .bind(entity.location.x)
        .bind(entity.location.y)
        .bind(entity.status)
        .bind(entity.created_at)
        .bind(entity.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if is_unique_violation(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(e),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Destination>, sqlx::Error> {
        sqlx::query_as::<_, Destination>(
            r#"
            SELECT id, name, description, province_id, destination_type_id,
                   location_x, location_y, status, created_at, updated_at
            FROM destinations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_all(&self) -> Result<Vec<Destination>, sqlx::Error> {
        sqlx::query_as::<_, Destination>(
            r#"
            SELECT id, name, description, province_id, destination_type_id,
                   location_x, location_y, status, created_at, updated_at
            FROM destinations
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn update(&self, entity: &Destination) -> Result<PersistOutcome, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE destinations
            SET name = $2, description = $3, province_id = $4,
                destination_type_id = $5, location_x = $6, location_y = $7,
                status = $8, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.province_id)
        .bind(entity.destination_type_id)
        .bind(entity.location.x)
        .bind(entity.location.y)
        .bind(entity.status)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(PersistOutcome::NotFound)
        } else {
            Ok(PersistOutcome::Applied)
        }
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: EntityStatus,
    ) -> Result<PersistOutcome, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE destinations
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(PersistOutcome::NotFound)
        } else {
            Ok(PersistOutcome::Applied)
        }
    }
}

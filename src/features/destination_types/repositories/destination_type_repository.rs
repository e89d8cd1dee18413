use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::repository::{
    is_unique_violation, EntityRepository, InsertOutcome, PersistOutcome,
};
use crate::features::destination_types::models::DestinationType;
use crate::shared::status::EntityStatus;

/// Postgres persistence for destination types
pub struct PgDestinationTypeRepository {
    pool: PgPool,
}

impl PgDestinationTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository<DestinationType> for PgDestinationTypeRepository {
    async fn insert(&self, entity: &DestinationType) -> Result<InsertOutcome, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO destination_types (id, name, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entity.id)
        .bind(&entity.name)
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

    async fn find_by_id(&self, id: Uuid) -> Result<Option<DestinationType>, sqlx::Error> {
        sqlx::query_as::<_, DestinationType>(
            r#"
            SELECT id, name, status, created_at, updated_at
            FROM destination_types
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_all(&self) -> Result<Vec<DestinationType>, sqlx::Error> {
        sqlx::query_as::<_, DestinationType>(
            r#"
            SELECT id, name, status, created_at, updated_at
            FROM destination_types
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn update(&self, entity: &DestinationType) -> Result<PersistOutcome, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE destination_types
            SET name = $2, status = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(entity.id)
        .bind(&entity.name)
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
            UPDATE destination_types
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

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::repository::{
    is_unique_violation, EntityRepository, InsertOutcome, PersistOutcome,
};
use crate::features::pois::models::Poi;
use crate::shared::status::EntityStatus;

/// Postgres persistence for POIs
pub struct PgPoiRepository {
    pool: PgPool,
}

impl PgPoiRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository<Poi> for PgPoiRepository {
    async fn insert(&self, entity: &Poi) -> Result<InsertOutcome, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO pois
                (id, name, description, destination_id, poi_type_id, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.destination_id)
        .bind(entity.poi_type_id)
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

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Poi>, sqlx::Error> {
        sqlx::query_as::<_, Poi>(
            r#"
            SELECT id, name, description, destination_id, poi_type_id, status, created_at, updated_at
            FROM pois
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_all(&self) -> Result<Vec<Poi>, sqlx::Error> {
        sqlx::query_as::<_, Poi>(
            r#"
            SELECT id, name, description, destination_id, poi_type_id, status, created_at, updated_at
            FROM pois
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn update(&self, entity: &Poi) -> Result<PersistOutcome, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE pois
            SET name = $2, description = $3, destination_id = $4, poi_type_id = $5,
                status = $6, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.destination_id)
        .bind(entity.poi_type_id)
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
            UPDATE pois
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

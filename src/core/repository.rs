use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::status::EntityStatus;

/// An entity kind managed by the catalog: identified by UUID, soft-deletable
/// through its status field.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
    fn status(&self) -> EntityStatus;
    fn set_status(&mut self, status: EntityStatus);
}

/// Result of an insert at the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A uniqueness constraint rejected the row.
    Duplicate,
}

/// Result of an update or status change at the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Applied,
    /// No row with the addressed identifier exists.
    NotFound,
}

/// Persistence capability for one entity kind.
///
/// The generic service is the only caller. Implementations report expected
/// conditions (duplicate key, missing row) through the outcome enums and
/// reserve `sqlx::Error` for infrastructure failures.
#[async_trait]
pub trait EntityRepository<E>: Send + Sync {
    async fn insert(&self, entity: &E) -> Result<InsertOutcome, sqlx::Error>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, sqlx::Error>;

    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error>;

    async fn update(&self, entity: &E) -> Result<PersistOutcome, sqlx::Error>;

    async fn set_status(&self, id: Uuid, status: EntityStatus)
        -> Result<PersistOutcome, sqlx::Error>;
}

/// Check for a PostgreSQL unique constraint violation (error code 23505).
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = e {
        return db_err.code().as_deref() == Some("23505");
    }
    false
}

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use tokio::sync::RwLock;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::core::repository::{
    CatalogEntity, EntityRepository, InsertOutcome, PersistOutcome,
};
#[cfg(test)]
use crate::shared::status::EntityStatus;

/// In-memory stand-in for a Postgres repository.
///
/// `conflicts_with` plays the role of the table's uniqueness constraint;
/// `break_connection` makes every call fail the way a dead pool would, for
/// exercising the server-error paths.
#[cfg(test)]
pub struct InMemoryRepository<E: CatalogEntity> {
    rows: RwLock<HashMap<Uuid, E>>,
    conflicts_with: fn(&E, &E) -> bool,
    broken: AtomicBool,
}

#[cfg(test)]
impl<E: CatalogEntity> InMemoryRepository<E> {
    pub fn new(conflicts_with: fn(&E, &E) -> bool) -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            conflicts_with,
            broken: AtomicBool::new(false),
        }
    }

    pub fn break_connection(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    fn check_connection(&self) -> Result<(), sqlx::Error> {
        if self.broken.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolClosed)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
#[async_trait]
impl<E: CatalogEntity> EntityRepository<E> for InMemoryRepository<E> {
    async fn insert(&self, entity: &E) -> Result<InsertOutcome, sqlx::Error> {
        self.check_connection()?;
        let mut rows = self.rows.write().await;
        if rows
            .values()
            .any(|existing| (self.conflicts_with)(existing, entity))
        {
            return Ok(InsertOutcome::Duplicate);
        }
        rows.insert(entity.id(), entity.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, sqlx::Error> {
        self.check_connection()?;
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error> {
        self.check_connection()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn update(&self, entity: &E) -> Result<PersistOutcome, sqlx::Error> {
        self.check_connection()?;
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&entity.id()) {
            return Ok(PersistOutcome::NotFound);
        }
        rows.insert(entity.id(), entity.clone());
        Ok(PersistOutcome::Applied)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: EntityStatus,
    ) -> Result<PersistOutcome, sqlx::Error> {
        self.check_connection()?;
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(entity) => {
                entity.set_status(status);
                Ok(PersistOutcome::Applied)
            }
            None => Ok(PersistOutcome::NotFound),
        }
    }
}

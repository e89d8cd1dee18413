use std::any::Any;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::mapper::Mapper;
use crate::core::outcome::{CreateOutcome, DeleteOutcome, UpdateOutcome};
use crate::core::repository::{CatalogEntity, EntityRepository, InsertOutcome, PersistOutcome};
use crate::shared::status::EntityStatus;

/// Generic CRUD service over one entity kind.
///
/// Stateless and shared across requests: holds only the persistence
/// capability and the conversion rule registry, both immutable. Every
/// operation is a single request-scoped unit of work. This is the only layer
/// that talks to the repository, and the only layer that applies conversion
/// rules; infrastructure failures stop here and leave as `ErrorInServer`.
pub struct CrudService<E> {
    repository: Arc<dyn EntityRepository<E>>,
    mapper: Arc<Mapper>,
}

impl<E> CrudService<E>
where
    E: CatalogEntity + Any,
{
    pub fn new(repository: Arc<dyn EntityRepository<E>>, mapper: Arc<Mapper>) -> Self {
        Self { repository, mapper }
    }

    /// List every entity of the kind, converted to the response shape `R`.
    ///
    /// An empty store yields an empty vec, never an error.
    pub async fn get_all<R: Any>(&self) -> Result<Vec<R>> {
        let entities = self.repository.find_all().await.map_err(|e| {
            tracing::error!("Failed to list entities: {:?}", e);
            AppError::Database(e)
        })?;

        entities
            .iter()
            .map(|entity| {
                self.mapper
                    .transform(entity)
                    .map_err(|e| AppError::Internal(e.to_string()))
            })
            .collect()
    }

    /// Fetch one entity by id, converted to the response shape `R`.
    ///
    /// Absence is `None`, not an error; the boundary decides how to surface it.
    pub async fn get_by_id<R: Any>(&self, id: Uuid) -> Result<Option<R>> {
        let entity = self.repository.find_by_id(id).await.map_err(|e| {
            tracing::error!("Failed to fetch entity {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        entity
            .map(|entity| {
                self.mapper
                    .transform(&entity)
                    .map_err(|e| AppError::Internal(e.to_string()))
            })
            .transpose()
    }

    /// Create an entity from a create view model.
    ///
    /// The conversion rule injects the identifier and the default status;
    /// uniqueness is resolved by the persistence capability (first writer
    /// wins, the loser observes `Conflict`).
    pub async fn create<C: Any>(&self, view_model: &C) -> CreateOutcome {
        let entity: E = match self.mapper.transform(view_model) {
            Ok(entity) => entity,
            Err(e) => {
                tracing::error!("Conversion rule failure on create: {}", e);
                return CreateOutcome::ErrorInServer;
            }
        };

        let id = entity.id();
        match self.repository.insert(&entity).await {
            Ok(InsertOutcome::Inserted) => {
                tracing::info!("Entity created: id={}", id);
                CreateOutcome::Success(id)
            }
            Ok(InsertOutcome::Duplicate) => CreateOutcome::Conflict,
            Err(e) => {
                tracing::error!("Failed to insert entity: {:?}", e);
                CreateOutcome::ErrorInServer
            }
        }
    }

    /// Update the entity addressed by the identifier embedded in the view
    /// model. The conversion rule forces the status back to the default.
    pub async fn update<U: Any>(&self, view_model: &U) -> UpdateOutcome {
        let entity: E = match self.mapper.transform(view_model) {
            Ok(entity) => entity,
            Err(e) => {
                tracing::error!("Conversion rule failure on update: {}", e);
                return UpdateOutcome::ErrorInServer;
            }
        };

        match self.repository.update(&entity).await {
            Ok(PersistOutcome::Applied) => {
                tracing::info!("Entity updated: id={}", entity.id());
                UpdateOutcome::Success
            }
            Ok(PersistOutcome::NotFound) => UpdateOutcome::NotAllowed,
            Err(e) => {
                tracing::error!("Failed to update entity {}: {:?}", entity.id(), e);
                UpdateOutcome::ErrorInServer
            }
        }
    }

    /// Soft delete: transition the entity's status to `Unavailable`.
    ///
    /// The row is never removed and stays retrievable through the read
    /// operations. No transition re-activates a deactivated entity.
    pub async fn deactivate(&self, id: Uuid) -> DeleteOutcome {
        match self
            .repository
            .set_status(id, EntityStatus::Unavailable)
            .await
        {
            Ok(PersistOutcome::Applied) => {
                tracing::info!("Entity deactivated: id={}", id);
                DeleteOutcome::Success
            }
            Ok(PersistOutcome::NotFound) => DeleteOutcome::NotAllowed,
            Err(e) => {
                tracing::error!("Failed to deactivate entity {}: {:?}", id, e);
                DeleteOutcome::ErrorInServer
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryRepository;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: Uuid,
        name: String,
        status: EntityStatus,
    }

    impl CatalogEntity for Item {
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

    struct CreateItem {
        name: String,
    }

    struct UpdateItem {
        id: Uuid,
        name: String,
        status: EntityStatus,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct ItemResponse {
        id: Uuid,
        name: String,
        status: EntityStatus,
    }

    fn test_mapper() -> Arc<Mapper> {
        let mut mapper = Mapper::new();
        mapper.register(|dto: &CreateItem| Item {
            id: Uuid::new_v4(),
            name: dto.name.clone(),
            status: EntityStatus::Available,
        });
        // Status is never copied from update input
        mapper.register(|dto: &UpdateItem| Item {
            id: dto.id,
            name: dto.name.clone(),
            status: EntityStatus::Available,
        });
        mapper.register(|item: &Item| ItemResponse {
            id: item.id,
            name: item.name.clone(),
            status: item.status,
        });
        Arc::new(mapper)
    }

    fn service_with_repo() -> (CrudService<Item>, Arc<InMemoryRepository<Item>>) {
        let repo = Arc::new(InMemoryRepository::new(|a: &Item, b: &Item| {
            a.name == b.name
        }));
        let service = CrudService::new(repo.clone() as Arc<dyn EntityRepository<Item>>, test_mapper());
        (service, repo)
    }

    #[tokio::test]
    async fn create_then_get_by_id_round_trips_with_default_status() {
        let (service, _repo) = service_with_repo();

        let outcome = service
            .create(&CreateItem {
                name: "beach".to_string(),
            })
            .await;
        let id = match outcome {
            CreateOutcome::Success(id) => id,
            other => panic!("expected success, got {:?}", other),
        };

        let fetched: Option<ItemResponse> = service.get_by_id(id).await.unwrap();
        let fetched = fetched.expect("created entity must be retrievable");
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.name, "beach");
        assert_eq!(fetched.status, EntityStatus::Available);
    }

    #[tokio::test]
    async fn duplicate_create_returns_conflict_and_persists_nothing_new() {
        let (service, _repo) = service_with_repo();

        service
            .create(&CreateItem {
                name: "museum".to_string(),
            })
            .await;
        let outcome = service
            .create(&CreateItem {
                name: "museum".to_string(),
            })
            .await;
        assert_eq!(outcome, CreateOutcome::Conflict);

        let all: Vec<ItemResponse> = service.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn create_reports_error_in_server_on_infrastructure_failure() {
        let (service, repo) = service_with_repo();
        repo.break_connection();

        let outcome = service
            .create(&CreateItem {
                name: "temple".to_string(),
            })
            .await;
        assert_eq!(outcome, CreateOutcome::ErrorInServer);
    }

    #[tokio::test]
    async fn update_of_absent_id_is_not_allowed_and_creates_nothing() {
        let (service, _repo) = service_with_repo();

        let outcome = service
            .update(&UpdateItem {
                id: Uuid::new_v4(),
                name: "renamed".to_string(),
                status: EntityStatus::Available,
            })
            .await;
        assert_eq!(outcome, UpdateOutcome::NotAllowed);

        let all: Vec<ItemResponse> = service.get_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn successful_update_forces_status_back_to_available() {
        let (service, _repo) = service_with_repo();

        let id = match service
            .create(&CreateItem {
                name: "harbor".to_string(),
            })
            .await
        {
            CreateOutcome::Success(id) => id,
            other => panic!("expected success, got {:?}", other),
        };
        assert_eq!(service.deactivate(id).await, DeleteOutcome::Success);

        // The input claims Unavailable; the conversion rule must ignore it.
        let outcome = service
            .update(&UpdateItem {
                id,
                name: "harbor front".to_string(),
                status: EntityStatus::Unavailable,
            })
            .await;
        assert_eq!(outcome, UpdateOutcome::Success);

        let fetched: ItemResponse = service.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.status, EntityStatus::Available);
        assert_eq!(fetched.name, "harbor front");
    }

    #[tokio::test]
    async fn deactivate_soft_deletes_but_keeps_record_retrievable() {
        let (service, _repo) = service_with_repo();

        let id = match service
            .create(&CreateItem {
                name: "park".to_string(),
            })
            .await
        {
            CreateOutcome::Success(id) => id,
            other => panic!("expected success, got {:?}", other),
        };

        let before: ItemResponse = service.get_by_id(id).await.unwrap().unwrap();
        assert_ne!(before.status, EntityStatus::Unavailable);

        assert_eq!(service.deactivate(id).await, DeleteOutcome::Success);

        let after: ItemResponse = service.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(after.status, EntityStatus::Unavailable);

        let all: Vec<ItemResponse> = service.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn deactivate_of_absent_id_is_not_allowed() {
        let (service, _repo) = service_with_repo();

        let outcome = service.deactivate(Uuid::new_v4()).await;
        assert_eq!(outcome, DeleteOutcome::NotAllowed);

        let all: Vec<ItemResponse> = service.get_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn get_all_on_empty_store_returns_empty_vec() {
        let (service, _repo) = service_with_repo();

        let all: Vec<ItemResponse> = service.get_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn unregistered_response_shape_is_an_internal_error() {
        let repo = Arc::new(InMemoryRepository::new(|a: &Item, b: &Item| {
            a.name == b.name
        }));
        // Mapper with no Item -> ItemResponse rule registered
        let mut mapper = Mapper::new();
        mapper.register(|dto: &CreateItem| Item {
            id: Uuid::new_v4(),
            name: dto.name.clone(),
            status: EntityStatus::Available,
        });
        let service: CrudService<Item> =
            CrudService::new(repo as Arc<dyn EntityRepository<Item>>, Arc::new(mapper));

        service
            .create(&CreateItem {
                name: "cave".to_string(),
            })
            .await;
        let result: Result<Vec<ItemResponse>> = service.get_all().await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}

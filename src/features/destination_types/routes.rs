use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::service::CrudService;
use crate::features::destination_types::handlers;
use crate::features::destination_types::models::DestinationType;

/// Create routes for the destination_types feature
pub fn routes(service: Arc<CrudService<DestinationType>>) -> Router {
    Router::new()
        .route(
            "/api/destination-types",
            get(handlers::list_destination_types)
                .post(handlers::create_destination_type)
                .put(handlers::update_destination_type),
        )
        .route(
            "/api/destination-types/{id}",
            get(handlers::get_destination_type).delete(handlers::deactivate_destination_type),
        )
        .with_state(service)
}

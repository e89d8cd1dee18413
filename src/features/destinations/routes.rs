use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::core::service::CrudService;
use crate::features::destinations::handlers;
use crate::features::destinations::models::Destination;

/// Create routes for the destinations feature
pub fn routes(service: Arc<CrudService<Destination>>) -> Router {
    Router::new()
        .route(
            "/api/destinations",
            get(handlers::list_destinations)
                .post(handlers::create_destination)
                .put(handlers::update_destination),
        )
        .route(
            "/api/destinations/{id}",
            get(handlers::get_destination).delete(handlers::deactivate_destination),
        )
        .with_state(service)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::service::CrudService;
use crate::features::pois::handlers;
use crate::features::pois::models::Poi;

/// Create routes for the POIs feature
pub fn routes(service: Arc<CrudService<Poi>>) -> Router {
    Router::new()
        .route(
            "/api/pois",
            get(handlers::list_pois)
                .post(handlers::create_poi)
                .put(handlers::update_poi),
        )
        .route(
            "/api/pois/{id}",
            get(handlers::get_poi).delete(handlers::deactivate_poi),
        )
        .with_state(service)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::service::CrudService;
use crate::features::provinces::handlers;
use crate::features::provinces::models::Province;

/// Create routes for the provinces feature
pub fn routes(service: Arc<CrudService<Province>>) -> Router {
    Router::new()
        .route(
            "/api/provinces",
            get(handlers::list_provinces)
                .post(handlers::create_province)
                .put(handlers::update_province),
        )
        .route(
            "/api/provinces/{id}",
            get(handlers::get_province).delete(handlers::deactivate_province),
        )
        .with_state(service)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::service::CrudService;
use crate::features::poi_types::handlers;
use crate::features::poi_types::models::PoiType;

/// Create routes for the poi_types feature
pub fn routes(service: Arc<CrudService<PoiType>>) -> Router {
    Router::new()
        .route(
            "/api/poi-types",
            get(handlers::list_poi_types)
                .post(handlers::create_poi_type)
                .put(handlers::update_poi_type),
        )
        .route(
            "/api/poi-types/{id}",
            get(handlers::get_poi_type).delete(handlers::deactivate_poi_type),
        )
        .with_state(service)
}

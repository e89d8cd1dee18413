use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::service::CrudService;
use crate::features::hashtags::handlers;
use crate::features::hashtags::models::Hashtag;

/// Create routes for the hashtags feature
pub fn routes(service: Arc<CrudService<Hashtag>>) -> Router {
    Router::new()
        .route(
            "/api/hashtags",
            get(handlers::list_hashtags)
                .post(handlers::create_hashtag)
                .put(handlers::update_hashtag),
        )
        .route(
            "/api/hashtags/{id}",
            get(handlers::get_hashtag).delete(handlers::deactivate_hashtag),
        )
        .with_state(service)
}

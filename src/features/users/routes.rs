use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::service::CrudService;
use crate::features::users::handlers;
use crate::features::users::models::User;

/// Create routes for the users feature
pub fn routes(service: Arc<CrudService<User>>) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .put(handlers::update_user),
        )
        .route(
            "/api/users/{id}",
            get(handlers::get_user).delete(handlers::deactivate_user),
        )
        .with_state(service)
}

//! Site Settings API (管理员，限本人站台)

mod handler;

use axum::{
    Router, middleware,
    routing::get,
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/admin/site-settings",
            get(handler::get).put(handler::put),
        )
        .route_layer(middleware::from_fn(require_admin))
}

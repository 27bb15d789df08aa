//! User API 模块 (全部要求管理员)

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/users", get(handler::list).post(handler::create))
        .route("/api/users/{username}", delete(handler::delete))
        .route_layer(middleware::from_fn(require_admin))
}

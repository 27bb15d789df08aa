//! Category API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // 公开：店面分类筛选用
        .route("/api/categories", get(handler::list))
        .merge(
            Router::new()
                .route("/api/categories", post(handler::create))
                .route("/api/categories/{id}", delete(handler::delete))
                .route_layer(middleware::from_fn(require_admin)),
        )
}

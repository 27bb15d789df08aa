//! Product API 模块
//!
//! 店面只读列表是公开路由；CRUD 与手动排序要求管理员。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    public_routes().merge(admin_routes())
}

fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/api/products", get(handler::list_published))
        .route("/api/products/{id}", get(handler::get_by_id))
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/products", get(handler::list_all))
        .route("/api/products", post(handler::create))
        .route("/api/products/order", patch(handler::reorder))
        .route(
            "/api/products/{id}",
            put(handler::update).delete(handler::delete),
        )
        .route_layer(middleware::from_fn(require_admin))
}

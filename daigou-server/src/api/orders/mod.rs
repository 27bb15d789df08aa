//! Order API 模块
//!
//! 结帐与客户查询是公开路由；列表、状态流转与删除要求管理员。

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    public_routes().merge(admin_routes())
}

fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", post(handler::create))
        .route("/api/orders/lookup", get(handler::lookup))
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(handler::list))
        .route("/api/orders/{order_id}/status", patch(handler::update_status))
        .route("/api/orders/{order_id}", delete(handler::delete))
        .route("/api/orders/bulk-delete", post(handler::bulk_delete))
        .route_layer(middleware::from_fn(require_admin))
}

//! Purchase Request API 模块
//!
//! 公开表单建立请求；列表与状态覆写要求管理员。
//! 没有删除路由 (后台介面历来没有这个入口)。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/requests", post(handler::create))
        .merge(
            Router::new()
                .route("/api/requests", get(handler::list))
                .route(
                    "/api/requests/{request_id}/status",
                    patch(handler::update_status),
                )
                .route_layer(middleware::from_fn(require_admin)),
        )
}

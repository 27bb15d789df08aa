//! Notification Summary API (需登入)
//!
//! 后台铃铛轮询这个端点取未读计数；它只读，不清除标记 ——
//! 标记由各自的列表接口清除。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/notifications/summary", get(handler::summary))
}

//! Auth API 模块

mod handler;

use axum::{
    Router,
    routing::{patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // 公开：登入换取令牌
        .route("/api/login", post(handler::login))
        // 需登入：自助改密码
        .route("/api/user/password", patch(handler::change_password))
}

//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登入与密码自助更新
//! - [`products`] - 商品管理接口 (店面读取 + 后台 CRUD/排序)
//! - [`categories`] - 分类管理接口
//! - [`orders`] - 订单生命周期接口
//! - [`requests`] - 代采购请求接口
//! - [`users`] - 后台帐号管理接口
//! - [`notifications`] - 未读计数
//! - [`dashboard`] - 销售统计
//! - [`site_settings`] - 网站主题/版面设定

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod requests;
pub mod site_settings;
pub mod users;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// 组装完整路由：资源路由 + 全局认证中间件 + CORS/Trace
///
/// 层级由内而外：require_auth → CORS → Trace。
/// 公开路由的放行规则见 [`crate::auth::middleware`]。
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(products::router())
        .merge(categories::router())
        .merge(orders::router())
        .merge(requests::router())
        .merge(users::router())
        .merge(notifications::router())
        .merge(dashboard::router())
        .merge(site_settings::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

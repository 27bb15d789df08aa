//! Shared types for the daigou platform
//!
//! 前后台共用的资料模型与 DTO：
//!
//! - [`models`] - 领域模型 (商品、分类、订单、代采购请求、用户、网站设定)
//! - [`client`] - API 请求/响应 DTO
//! - [`util`] - 时间戳与 ID 生成工具

pub mod client;
pub mod models;
pub mod util;

pub use models::{
    ActivityEntry, Category, Order, OrderItem, OrderStatus, Product, ProductStatus,
    PurchaseRequest, RequestStatus, SiteSettings, User,
};
pub use util::{now_millis, prefixed_id};

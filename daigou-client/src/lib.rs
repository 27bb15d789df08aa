//! Daigou Client - 代采购平台 API 客户端
//!
//! 店面与后台两组型别安全的 API 包装，外加一个取代浏览器
//! `localStorage` 的档案型本地存储 (购物车 + 凭证)。
//!
//! # 模块结构
//!
//! - [`config`] - 客户端配置
//! - [`error`] - 错误类型
//! - [`http`] - 底层 HTTP 封装
//! - [`storage`] - 本地 key-value 存储
//! - [`cart`] - 购物车
//! - [`storefront`] - 店面 (公开) API
//! - [`admin`] - 后台 (Bearer) API

pub mod admin;
pub mod cart;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;
pub mod storefront;

pub use admin::AdminClient;
pub use cart::CartStore;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use storage::LocalStore;
pub use storefront::{CheckoutDetails, StorefrontClient};

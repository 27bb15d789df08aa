//! API 请求/响应 DTO
//!
//! 服务端 handler 与 daigou-client 共用，字段与店面 JS 的 JSON 契约
//! 一一对应 (camelCase)。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Order, OrderItem, OrderStatus, Product, ProductStatus, PurchaseRequest, RequestStatus,
};

// ========== Auth ==========

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// 仅带讯息的通用响应，如删除成功
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Password rotation payload (self-service)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

// ========== Orders ==========

/// 店面结帐送出的订单资料
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default)]
    pub paopaohu_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub last_five_digits: String,
    /// 客户端计算的总额，服务端不重算
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreated {
    pub message: String,
    pub order: Order,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdated {
    pub message: String,
    pub order: Order,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteRequest {
    #[serde(default)]
    pub order_ids: Vec<String>,
}

// ========== Purchase Requests ==========

/// 代采购请求表单
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreate {
    #[serde(default)]
    pub product_url: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub specs: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paopaohu_id: Option<String>,
    #[serde(default)]
    pub contact_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCreated {
    pub message: String,
    pub request: PurchaseRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestStatusUpdate {
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestUpdated {
    pub message: String,
    pub request: PurchaseRequest,
}

// ========== Catalog ==========

/// 新增商品 payload；除 title/price 外皆可省略
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[serde(default)]
    pub title: String,
    /// price 为必填；缺字段时由 handler 以验证错误拒绝
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<Decimal>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 合并更新 payload：只覆写出现的字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub message: String,
    pub product: Product,
}

/// 商品手动排序：依序给定的 id 取得 sortOrder = 索引值
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    #[serde(default)]
    pub ordered_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    #[serde(default)]
    pub name: String,
}

// ========== Users ==========

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

// ========== Site Settings ==========

/// 网站设定整包覆写 payload (owner 由凭证决定)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettingsUpdate {
    #[serde(default)]
    pub theme: serde_json::Value,
    #[serde(default)]
    pub layout: serde_json::Value,
    #[serde(default)]
    pub content: serde_json::Value,
}

// ========== Notifications & Dashboard ==========

/// 后台铃铛的未读计数
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    pub new_orders_count: u64,
    pub new_requests_count: u64,
}

/// 单一时间窗的订单数与销售额
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    pub count: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub sales: Decimal,
}

impl Default for WindowStats {
    fn default() -> Self {
        Self {
            count: 0,
            sales: Decimal::ZERO,
        }
    }
}

/// 今日 / 本周 (周一起) / 本月 / 今年 四个独立窗口
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub today: WindowStats,
    pub this_week: WindowStats,
    pub this_month: WindowStats,
    pub this_year: WindowStats,
}

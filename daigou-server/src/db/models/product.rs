//! Product Model (DB)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::ProductStatus;

/// Product record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<RecordId>,
    pub title: String,
    pub category: String,
    pub price: Decimal,
    #[serde(default)]
    pub service_fee: Decimal,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub stock: i64,
    /// 旧资料缺 status 时视同已上架
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sort_order: i64,
}

impl From<Product> for shared::models::Product {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.as_ref().map(|t| t.key().to_string()).unwrap_or_default(),
            title: p.title,
            category: p.category,
            price: p.price,
            service_fee: p.service_fee,
            image_urls: p.image_urls,
            long_description: p.long_description,
            stock: p.stock,
            status: p.status,
            tags: p.tags,
            sort_order: p.sort_order,
        }
    }
}

/// 新增时写入的内容 (不含 id，id 由 repository 指定)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductContent {
    pub title: String,
    pub category: String,
    pub price: Decimal,
    pub service_fee: Decimal,
    pub image_urls: Vec<String>,
    pub long_description: String,
    pub stock: i64,
    pub status: ProductStatus,
    pub tags: Vec<String>,
    pub sort_order: i64,
}

/// 合并更新 patch：只序列化出现的字段
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

impl From<shared::client::ProductUpdate> for ProductPatch {
    fn from(u: shared::client::ProductUpdate) -> Self {
        Self {
            title: u.title,
            category: u.category,
            price: u.price,
            service_fee: u.service_fee,
            image_urls: u.image_urls,
            long_description: u.long_description,
            stock: u.stock,
            status: u.status,
            tags: u.tags,
            sort_order: u.sort_order,
        }
    }
}

/// 手动排序专用 patch
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SortOrderPatch {
    pub sort_order: i64,
}

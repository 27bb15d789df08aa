//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 商品上架状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Published,
}

impl Default for ProductStatus {
    /// 旧资料没有 status 字段，一律视为已上架
    fn default() -> Self {
        ProductStatus::Published
    }
}

/// Product model
///
/// `sortOrder` 是后台手动排序的名次，与建立时间无关。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub service_fee: Decimal,
    /// 图片/影片连结，依显示顺序排列
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sort_order: i64,
}

/// 未分类商品的预设分类标签
pub fn default_category() -> String {
    "未分類".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_record_without_status_is_published() {
        let json = r#"{
            "id": "p1",
            "title": "日本零食箱",
            "price": 350.0
        }"#;
        let product: Product = serde_json::from_str(json).expect("legacy product should parse");
        assert_eq!(product.status, ProductStatus::Published);
        assert_eq!(product.category, "未分類");
        assert_eq!(product.service_fee, Decimal::ZERO);
        assert_eq!(product.sort_order, 0);
    }

    #[test]
    fn status_round_trips_as_lowercase_labels() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::Draft).expect("serialize"),
            r#""draft""#
        );
        assert_eq!(
            serde_json::to_string(&ProductStatus::Published).expect("serialize"),
            r#""published""#
        );
    }
}

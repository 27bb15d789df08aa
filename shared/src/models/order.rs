//! Order Model
//!
//! 订单由店面结帐建立，后台负责状态流转。每次状态变更都会在
//! `activityLog` 里追加一笔不可变的审计记录。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 订单状态（正向流程 + 终态取消）
///
/// 持久化与 API 使用店面沿用的繁体中文标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "待處理")]
    Pending,
    #[serde(rename = "已通知廠商發貨")]
    VendorNotified,
    #[serde(rename = "已發貨")]
    Shipped,
    #[serde(rename = "已完成")]
    Completed,
    #[serde(rename = "訂單取消")]
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "待處理",
            OrderStatus::VendorNotified => "已通知廠商發貨",
            OrderStatus::Shipped => "已發貨",
            OrderStatus::Completed => "已完成",
            OrderStatus::Cancelled => "訂單取消",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 审计记录：一次状态变更
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Unix millis
    pub timestamp: i64,
    /// 操作者 (后台帐号)
    pub updated_by: String,
    /// 如「狀態由「待處理」更新為「已發貨」」
    pub action: String,
}

/// 订单明细项，结构与购物车项一致
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub service_fee: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub notes: String,
}

/// Order model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    /// Unix millis
    pub created_at: i64,
    pub status: OrderStatus,
    /// 后台是否尚未看过这笔订单
    pub is_new: bool,
    #[serde(default)]
    pub activity_log: Vec<ActivityEntry>,
    /// 跑跑虎会员编号
    pub paopaohu_id: String,
    pub email: String,
    /// 统一编号 (8 码数字)，选填
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// 汇款帐号末五码
    pub last_five_digits: String,
    /// 客户端计算的总金额，服务端按原样信任存储
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_domain_labels() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).expect("serialize"),
            "\"待處理\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).expect("serialize"),
            "\"訂單取消\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"已發貨\"").expect("parse");
        assert_eq!(parsed, OrderStatus::Shipped);
    }

    #[test]
    fn order_uses_camel_case_wire_fields() {
        let order = Order {
            order_id: "ord_1".to_string(),
            created_at: 1_700_000_000_000,
            status: OrderStatus::Pending,
            is_new: true,
            activity_log: vec![],
            paopaohu_id: "PPH-123".to_string(),
            email: "buyer@example.com".to_string(),
            tax_id: None,
            last_five_digits: "12345".to_string(),
            total_amount: Decimal::from(240),
            items: vec![OrderItem {
                product_id: "p1".to_string(),
                title: "零食箱".to_string(),
                price: Decimal::from(100),
                service_fee: Decimal::from(20),
                quantity: 2,
                notes: String::new(),
            }],
        };
        let json = serde_json::to_value(&order).expect("serialize");
        assert_eq!(json["orderId"], "ord_1");
        assert_eq!(json["paopaohuId"], "PPH-123");
        assert_eq!(json["lastFiveDigits"], "12345");
        assert_eq!(json["isNew"], true);
        assert_eq!(json["items"][0]["productId"], "p1");
        assert_eq!(json["items"][0]["serviceFee"], 20.0);
        // taxId 为 None 时不出现在 JSON 中
        assert!(json.get("taxId").is_none());
    }
}

//! Order Model (DB)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{ActivityEntry, OrderItem, OrderStatus};

/// Order record as stored
///
/// 记录键即订单编号 (`ord_…`)，状态以店面沿用的中文标签持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<RecordId>,
    pub created_at: i64,
    pub status: OrderStatus,
    pub is_new: bool,
    #[serde(default)]
    pub activity_log: Vec<ActivityEntry>,
    pub paopaohu_id: String,
    pub email: String,
    #[serde(default)]
    pub tax_id: Option<String>,
    pub last_five_digits: String,
    #[serde(default)]
    pub total_amount: Decimal,
    pub items: Vec<OrderItem>,
}

impl From<Order> for shared::models::Order {
    fn from(o: Order) -> Self {
        Self {
            order_id: o.id.as_ref().map(|t| t.key().to_string()).unwrap_or_default(),
            created_at: o.created_at,
            status: o.status,
            is_new: o.is_new,
            activity_log: o.activity_log,
            paopaohu_id: o.paopaohu_id,
            email: o.email,
            tax_id: o.tax_id,
            last_five_digits: o.last_five_digits,
            total_amount: o.total_amount,
            items: o.items,
        }
    }
}

/// 新订单写入内容 (id 由 repository 指定为 `ord_…`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderContent {
    pub created_at: i64,
    pub status: OrderStatus,
    pub is_new: bool,
    pub activity_log: Vec<ActivityEntry>,
    pub paopaohu_id: String,
    pub email: String,
    pub tax_id: Option<String>,
    pub last_five_digits: String,
    pub total_amount: Decimal,
    pub items: Vec<OrderItem>,
}

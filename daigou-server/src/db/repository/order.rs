//! Order Repository
//!
//! 订单生命周期的持久层：建立、列表 (连带清除未读标记)、状态流转
//! (附审计记录)、单笔/批次删除、客户查询与统计读取。

use serde::Deserialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Order, OrderContent};
use shared::client::OrderCreate;
use shared::models::{ActivityEntry, OrderStatus};
use shared::util::{now_millis, prefixed_id};

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 建立订单：指定编号/时间戳，初始状态「待處理」，未读，空审计记录。
    /// 字段验证在 handler 层完成，这里只负责写入。
    pub async fn create(&self, data: OrderCreate) -> RepoResult<shared::models::Order> {
        let content = OrderContent {
            created_at: now_millis(),
            status: OrderStatus::Pending,
            is_new: true,
            activity_log: Vec::new(),
            paopaohu_id: data.paopaohu_id,
            email: data.email,
            tax_id: data.tax_id,
            last_five_digits: data.last_five_digits,
            total_amount: data.total_amount,
            items: data.items,
        };

        let id = prefixed_id("ord_");
        let created: Option<Order> = self
            .base
            .db()
            .create((TABLE, id.as_str()))
            .content(content)
            .await?;
        created
            .map(|o| o.into())
            .ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// 后台列表：新到旧。副作用：把所有未读订单标成已读
    /// (一次列表视为确认，响应仍带读取当下的 is_new 值)。
    pub async fn find_all_and_mark_seen(&self) -> RepoResult<Vec<shared::models::Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at DESC")
            .await?
            .take(0)?;

        self.base
            .db()
            .query("UPDATE order SET is_new = false WHERE is_new = true")
            .await?;

        Ok(orders.into_iter().map(|o| o.into()).collect())
    }

    /// 全部订单 (统计用)，不动未读标记
    pub async fn find_all(&self) -> RepoResult<Vec<shared::models::Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders.into_iter().map(|o| o.into()).collect())
    }

    /// 客户订单查询 (公开)，新到旧
    pub async fn find_by_customer(
        &self,
        paopaohu_id: &str,
    ) -> RepoResult<Vec<shared::models::Order>> {
        let paopaohu_id = paopaohu_id.to_string();
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE paopaohu_id = $paopaohu_id \
                 ORDER BY created_at DESC",
            )
            .bind(("paopaohu_id", paopaohu_id))
            .await?
            .take(0)?;
        Ok(orders.into_iter().map(|o| o.into()).collect())
    }

    /// 状态流转：同状态视为无操作 (仍回成功且不追加审计记录)；
    /// 变更时原子地改状态并追加一笔审计记录。
    pub async fn update_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
        updated_by: &str,
    ) -> RepoResult<shared::models::Order> {
        let existing: Option<Order> = self.base.db().select((TABLE, order_id)).await?;
        let existing = existing.ok_or_else(|| RepoError::NotFound("找不到該訂單".to_string()))?;

        if existing.status == new_status {
            return Ok(existing.into());
        }

        let entry = ActivityEntry {
            timestamp: now_millis(),
            updated_by: updated_by.to_string(),
            action: format!("狀態由「{}」更新為「{}」", existing.status, new_status),
        };

        let record = RecordId::from_table_key(TABLE, order_id);
        let mut result = self
            .base
            .db()
            .query("UPDATE $order SET status = $status, activity_log += $entry RETURN AFTER")
            .bind(("order", record))
            .bind(("status", new_status))
            .bind(("entry", entry))
            .await?;
        let updated: Option<Order> = result.take(0)?;
        updated
            .map(|o| o.into())
            .ok_or_else(|| RepoError::NotFound("找不到該訂單".to_string()))
    }

    /// Delete a single order
    pub async fn delete(&self, order_id: &str) -> RepoResult<()> {
        let deleted: Option<Order> = self.base.db().delete((TABLE, order_id)).await?;
        deleted
            .map(|_| ())
            .ok_or_else(|| RepoError::NotFound("找不到該訂單".to_string()))
    }

    /// 批次删除：回传实际删除笔数，不存在的 id 静默略过
    pub async fn bulk_delete(&self, order_ids: &[String]) -> RepoResult<usize> {
        let ids: Vec<String> = order_ids.to_vec();
        let mut result = self
            .base
            .db()
            .query("DELETE order WHERE record::id(id) INSIDE $ids RETURN BEFORE")
            .bind(("ids", ids))
            .await?;
        let deleted: Vec<Order> = result.take(0)?;
        Ok(deleted.len())
    }

    /// 未读订单数 (铃铛计数，不清除标记)
    pub async fn count_new(&self) -> RepoResult<u64> {
        #[derive(Deserialize)]
        struct CountRow {
            count: u64,
        }

        let row: Option<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM order WHERE is_new = true GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }
}

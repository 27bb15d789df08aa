//! Purchase Request Repository
//!
//! 与订单不同：状态变更不记审计、不做同状态短路，也没有删除操作
//! (后台介面历来没有这个入口，维持现状)。

use serde::Deserialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{PurchaseRequest, PurchaseRequestContent};
use shared::client::RequestCreate;
use shared::models::RequestStatus;
use shared::util::{now_millis, prefixed_id};

const TABLE: &str = "purchase_request";

#[derive(Clone)]
pub struct PurchaseRequestRepository {
    base: BaseRepository,
}

impl PurchaseRequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 建立请求：初始状态「待報價」，未读
    pub async fn create(&self, data: RequestCreate) -> RepoResult<shared::models::PurchaseRequest> {
        let content = PurchaseRequestContent {
            received_at: now_millis(),
            status: RequestStatus::PendingQuote,
            is_new: true,
            product_url: data.product_url,
            product_name: data.product_name,
            specs: data.specs,
            quantity: data.quantity,
            paopaohu_id: data.paopaohu_id,
            contact_info: data.contact_info,
            notes: data.notes,
        };

        let id = prefixed_id("req_");
        let created: Option<PurchaseRequest> = self
            .base
            .db()
            .create((TABLE, id.as_str()))
            .content(content)
            .await?;
        created
            .map(|r| r.into())
            .ok_or_else(|| RepoError::Database("Failed to create purchase request".to_string()))
    }

    /// 后台列表：新到旧，连带清除未读标记
    pub async fn find_all_and_mark_seen(
        &self,
    ) -> RepoResult<Vec<shared::models::PurchaseRequest>> {
        let requests: Vec<PurchaseRequest> = self
            .base
            .db()
            .query("SELECT * FROM purchase_request ORDER BY received_at DESC")
            .await?
            .take(0)?;

        self.base
            .db()
            .query("UPDATE purchase_request SET is_new = false WHERE is_new = true")
            .await?;

        Ok(requests.into_iter().map(|r| r.into()).collect())
    }

    /// 状态覆写：无条件写入 (无审计、无短路)
    pub async fn update_status(
        &self,
        request_id: &str,
        new_status: RequestStatus,
    ) -> RepoResult<shared::models::PurchaseRequest> {
        let record = RecordId::from_table_key(TABLE, request_id);
        let mut result = self
            .base
            .db()
            .query("UPDATE $request SET status = $status RETURN AFTER")
            .bind(("request", record))
            .bind(("status", new_status))
            .await?;
        let updated: Option<PurchaseRequest> = result.take(0)?;
        updated
            .map(|r| r.into())
            .ok_or_else(|| RepoError::NotFound("找不到該請求".to_string()))
    }

    /// 未读请求数 (铃铛计数，不清除标记)
    pub async fn count_new(&self) -> RepoResult<u64> {
        #[derive(Deserialize)]
        struct CountRow {
            count: u64,
        }

        let row: Option<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM purchase_request WHERE is_new = true GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }
}

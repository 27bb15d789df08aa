//! Order API Handlers
//!
//! 订单生命周期：结帐建立 → 后台状态流转 (附审计) → 删除。
//! 建立成功后以背景任务寄出通知信，寄信失败不影响下单。

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::AppResult;
use crate::utils::validation::validate_tax_id;
use shared::client::{
    BulkDeleteRequest, MessageResponse, OrderCreate, OrderCreated, OrderStatusUpdate, OrderUpdated,
};
use shared::models::Order;

/// POST /api/orders - 店面结帐建立订单
///
/// 必填：paopaohuId、lastFiveDigits、email、非空 items。
/// totalAmount 信任客户端计算值，按原样存储。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    if payload.paopaohu_id.trim().is_empty()
        || payload.last_five_digits.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.items.is_empty()
    {
        return Err(AppError::validation("訂單資料不完整".to_string()));
    }
    validate_tax_id(&payload.tax_id)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(payload).await?;

    // 通知为 best-effort，不回滚也不报错
    state.notifier.notify_order_created(&order);

    tracing::info!(order_id = %order.order_id, "Order created");

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "訂單建立成功".to_string(),
            order,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default, rename = "paopaohuId")]
    paopaohu_id: String,
}

/// GET /api/orders/lookup?paopaohuId=X - 客户订单查询 (公开，新到旧)
pub async fn lookup(
    State(state): State<ServerState>,
    Query(query): Query<LookupQuery>,
) -> AppResult<Json<Vec<Order>>> {
    if query.paopaohu_id.trim().is_empty() {
        return Err(AppError::validation("請提供跑跑虎會員編號".to_string()));
    }

    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_by_customer(&query.paopaohu_id).await?;
    Ok(Json(orders))
}

/// GET /api/orders - 后台订单列表 (新到旧)
///
/// 副作用：清除所有未读标记 —— 一次列表视为后台已确认。
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all_and_mark_seen().await?;
    Ok(Json(orders))
}

/// PATCH /api/orders/:orderId/status - 状态流转
///
/// 同状态为无操作 (仍回成功)；变更时追加一笔含操作者的审计记录。
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(order_id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<OrderUpdated>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .update_status(&order_id, payload.status, &user.username)
        .await?;

    tracing::info!(
        order_id = %order.order_id,
        status = %order.status,
        updated_by = %user.username,
        "Order status updated"
    );

    Ok(Json(OrderUpdated {
        message: "訂單狀態更新成功".to_string(),
        order,
    }))
}

/// DELETE /api/orders/:orderId - 删除单笔订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = OrderRepository::new(state.db.clone());
    repo.delete(&order_id).await?;
    Ok(Json(MessageResponse {
        message: "訂單刪除成功".to_string(),
    }))
}

/// POST /api/orders/bulk-delete - 批次删除
///
/// 回报实际删除笔数；不存在的 id 静默略过。
pub async fn bulk_delete(
    State(state): State<ServerState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> AppResult<Json<MessageResponse>> {
    if payload.order_ids.is_empty() {
        return Err(AppError::validation("請提供要刪除的訂單 ID".to_string()));
    }

    let repo = OrderRepository::new(state.db.clone());
    let deleted = repo.bulk_delete(&payload.order_ids).await?;
    Ok(Json(MessageResponse {
        message: format!("成功刪除 {deleted} 筆訂單"),
    }))
}

//! Purchase Request API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::PurchaseRequestRepository;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_URL_LEN, validate_required_text};
use shared::client::{RequestCreate, RequestCreated, RequestStatusUpdate, RequestUpdated};
use shared::models::PurchaseRequest;

/// POST /api/requests - 公开表单建立代采购请求
///
/// 必填：productUrl、productName、contactInfo；quantity 须为正整数。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RequestCreate>,
) -> AppResult<(StatusCode, Json<RequestCreated>)> {
    if payload.product_url.trim().is_empty()
        || payload.product_name.trim().is_empty()
        || payload.contact_info.trim().is_empty()
    {
        return Err(AppError::validation("請求資料不完整".to_string()));
    }
    validate_required_text(&payload.product_url, "商品連結", MAX_URL_LEN)?;
    if payload.quantity == 0 {
        return Err(AppError::validation("數量須為正整數".to_string()));
    }

    let repo = PurchaseRequestRepository::new(state.db.clone());
    let request = repo.create(payload).await?;

    // 通知为 best-effort，不回滚也不报错
    state.notifier.notify_request_created(&request);

    tracing::info!(request_id = %request.request_id, "Purchase request received");

    Ok((
        StatusCode::CREATED,
        Json(RequestCreated {
            message: "代採購請求已收到".to_string(),
            request,
        }),
    ))
}

/// GET /api/requests - 后台请求列表 (新到旧)
///
/// 副作用：清除所有未读标记。
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PurchaseRequest>>> {
    let repo = PurchaseRequestRepository::new(state.db.clone());
    let requests = repo.find_all_and_mark_seen().await?;
    Ok(Json(requests))
}

/// PATCH /api/requests/:requestId/status - 状态覆写
///
/// 无条件写入：不记审计、不做同状态短路 (与订单不对称，维持现状)。
pub async fn update_status(
    State(state): State<ServerState>,
    Path(request_id): Path<String>,
    Json(payload): Json<RequestStatusUpdate>,
) -> AppResult<Json<RequestUpdated>> {
    let repo = PurchaseRequestRepository::new(state.db.clone());
    let request = repo.update_status(&request_id, payload.status).await?;

    Ok(Json(RequestUpdated {
        message: "請求狀態更新成功".to_string(),
        request,
    }))
}

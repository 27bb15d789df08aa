//! Notification Summary Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{OrderRepository, PurchaseRequestRepository};
use crate::utils::AppResult;
use shared::client::NotificationSummary;

/// GET /api/notifications/summary - 未读订单/请求计数
pub async fn summary(
    State(state): State<ServerState>,
    _user: CurrentUser,
) -> AppResult<Json<NotificationSummary>> {
    let orders = OrderRepository::new(state.db.clone());
    let requests = PurchaseRequestRepository::new(state.db.clone());

    let new_orders_count = orders.count_new().await?;
    let new_requests_count = requests.count_new().await?;

    Ok(Json(NotificationSummary {
        new_orders_count,
        new_requests_count,
    }))
}

//! 订单生命周期集成测试：建立、未读标记、状态流转与审计、删除

mod common;

use http::StatusCode;
use rust_decimal::Decimal;

use common::{login_root, read_json, sample_order_payload, send_json, test_app, test_state};
use daigou_server::db::repository::{OrderRepository, RepoError};
use shared::client::OrderCreate;
use shared::models::OrderStatus;

fn order_create(paopaohu_id: &str) -> OrderCreate {
    let mut payload: OrderCreate =
        serde_json::from_value(sample_order_payload()).expect("valid payload");
    payload.paopaohu_id = paopaohu_id.to_string();
    payload
}

#[tokio::test]
async fn created_order_starts_pending_unseen_with_empty_log() {
    let state = test_state().await;
    let repo = OrderRepository::new(state.db.clone());

    let order = repo.create(order_create("PPH-001")).await.expect("create");

    assert!(order.order_id.starts_with("ord_"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.is_new);
    assert!(order.activity_log.is_empty());
    assert_eq!(order.total_amount, Decimal::from(240));

    let second = repo.create(order_create("PPH-001")).await.expect("create");
    assert_ne!(order.order_id, second.order_id);
}

#[tokio::test]
async fn incomplete_checkout_is_rejected_without_persisting() {
    let (state, app) = test_app().await;

    let mut payload = sample_order_payload();
    payload["paopaohuId"] = serde_json::Value::String(String::new());

    let response = send_json(&app, "POST", "/api/orders", None, Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // 空 items 同样拒绝
    let mut payload = sample_order_payload();
    payload["items"] = serde_json::json!([]);
    let response = send_json(&app, "POST", "/api/orders", None, Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // 没有任何写入
    let repo = OrderRepository::new(state.db.clone());
    assert!(repo.find_all().await.expect("list").is_empty());
}

#[tokio::test]
async fn checkout_over_http_returns_created_order() {
    let (_state, app) = test_app().await;

    let response = send_json(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(sample_order_payload()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["message"], "訂單建立成功");
    assert_eq!(body["order"]["status"], "待處理");
    assert_eq!(body["order"]["isNew"], true);
    assert_eq!(body["order"]["totalAmount"], 240.0);
}

#[tokio::test]
async fn same_status_update_is_a_no_op_on_the_audit_log() {
    let state = test_state().await;
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(order_create("PPH-001")).await.expect("create");

    let updated = repo
        .update_status(&order.order_id, OrderStatus::Shipped, "randy")
        .await
        .expect("first transition");
    assert_eq!(updated.activity_log.len(), 1);

    let unchanged = repo
        .update_status(&order.order_id, OrderStatus::Shipped, "randy")
        .await
        .expect("same-status update still succeeds");
    assert_eq!(unchanged.activity_log.len(), 1);
    assert_eq!(unchanged.status, OrderStatus::Shipped);
}

#[tokio::test]
async fn each_transition_appends_one_entry_naming_both_statuses() {
    let state = test_state().await;
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(order_create("PPH-001")).await.expect("create");

    repo.update_status(&order.order_id, OrderStatus::VendorNotified, "randy")
        .await
        .expect("transition 1");
    let after = repo
        .update_status(&order.order_id, OrderStatus::Shipped, "amy")
        .await
        .expect("transition 2");

    assert_eq!(after.activity_log.len(), 2);

    let first = &after.activity_log[0];
    assert_eq!(first.updated_by, "randy");
    assert!(first.action.contains("待處理"));
    assert!(first.action.contains("已通知廠商發貨"));

    let second = &after.activity_log[1];
    assert_eq!(second.updated_by, "amy");
    assert!(second.action.contains("已通知廠商發貨"));
    assert!(second.action.contains("已發貨"));
    assert!(first.timestamp <= second.timestamp);
}

#[tokio::test]
async fn unknown_order_id_yields_not_found() {
    let state = test_state().await;
    let repo = OrderRepository::new(state.db.clone());

    let err = repo
        .update_status("ord_missing", OrderStatus::Shipped, "randy")
        .await
        .expect_err("unknown id");
    assert!(matches!(err, RepoError::NotFound(_)));

    let err = repo.delete("ord_missing").await.expect_err("unknown id");
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn admin_listing_clears_new_flags_exactly_once() {
    let state = test_state().await;
    let repo = OrderRepository::new(state.db.clone());
    repo.create(order_create("PPH-001")).await.expect("create");
    repo.create(order_create("PPH-002")).await.expect("create");

    let first_listing = repo.find_all_and_mark_seen().await.expect("list");
    assert!(first_listing.iter().all(|o| o.is_new));

    let second_listing = repo.find_all_and_mark_seen().await.expect("list");
    assert!(second_listing.iter().all(|o| !o.is_new));
}

#[tokio::test]
async fn listings_come_back_newest_first() {
    let state = test_state().await;
    let repo = OrderRepository::new(state.db.clone());
    let first = repo.create(order_create("PPH-001")).await.expect("create");
    let second = repo.create(order_create("PPH-001")).await.expect("create");

    let orders = repo.find_all().await.expect("list");
    assert_eq!(orders.len(), 2);
    assert!(orders[0].created_at >= orders[1].created_at);

    let lookup = repo.find_by_customer("PPH-001").await.expect("lookup");
    assert_eq!(lookup.len(), 2);
    // 不属于该客户的编号查不到
    assert!(repo
        .find_by_customer("PPH-999")
        .await
        .expect("lookup")
        .is_empty());

    let ids: Vec<&str> = lookup.iter().map(|o| o.order_id.as_str()).collect();
    assert!(ids.contains(&first.order_id.as_str()));
    assert!(ids.contains(&second.order_id.as_str()));
}

#[tokio::test]
async fn lookup_without_member_id_is_a_validation_error() {
    let (_state, app) = test_app().await;

    let response = send_json(&app, "GET", "/api/orders/lookup", None, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send_json(&app, "GET", "/api/orders/lookup?paopaohuId=", None, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bulk_delete_reports_only_actual_removals() {
    let state = test_state().await;
    let repo = OrderRepository::new(state.db.clone());
    let a = repo.create(order_create("PPH-001")).await.expect("create");
    let b = repo.create(order_create("PPH-002")).await.expect("create");
    repo.create(order_create("PPH-003")).await.expect("create");

    let deleted = repo
        .bulk_delete(&[
            a.order_id.clone(),
            b.order_id.clone(),
            "ord_missing".to_string(),
        ])
        .await
        .expect("bulk delete");
    assert_eq!(deleted, 2);

    let remaining = repo.find_all().await.expect("list");
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn status_update_over_http_records_the_acting_admin() {
    let (state, app) = test_app().await;
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(order_create("PPH-001")).await.expect("create");

    let token = login_root(&app).await;
    let response = send_json(
        &app,
        "PATCH",
        &format!("/api/orders/{}/status", order.order_id),
        Some(&token),
        Some(serde_json::json!({ "status": "已發貨" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["order"]["status"], "已發貨");
    assert_eq!(body["order"]["activityLog"][0]["updatedBy"], "randy");
}

#[tokio::test]
async fn new_order_count_survives_summary_but_not_listing() {
    let (state, app) = test_app().await;
    let repo = OrderRepository::new(state.db.clone());
    repo.create(order_create("PPH-001")).await.expect("create");

    let token = login_root(&app).await;

    // 铃铛轮询不清除未读
    let response = send_json(&app, "GET", "/api/notifications/summary", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["newOrdersCount"], 1);

    let response = send_json(&app, "GET", "/api/notifications/summary", Some(&token), None).await;
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["newOrdersCount"], 1);

    // 列表才会清除
    let response = send_json(&app, "GET", "/api/orders", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_json(&app, "GET", "/api/notifications/summary", Some(&token), None).await;
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["newOrdersCount"], 0);
}

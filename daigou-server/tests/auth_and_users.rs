//! 认证与帐号管理集成测试：登入、角色闸门、最高管理员保护

mod common;

use http::StatusCode;

use common::{
    ROOT_USERNAME, login, login_root, read_json, send_json, test_app,
};
use daigou_server::db::repository::{RepoError, UserRepository};

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let (_state, app) = test_app().await;

    let response = send_json(
        &app,
        "POST",
        "/api/login",
        None,
        Some(serde_json::json!({ "username": "randy", "password": "wrong" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["message"], "帳號或密碼錯誤");

    // 不存在的帐号拿到同一句错误 (避免帐号枚举)
    let response = send_json(
        &app,
        "POST",
        "/api/login",
        None,
        Some(serde_json::json!({ "username": "ghost", "password": "whatever" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["message"], "帳號或密碼錯誤");
}

#[tokio::test]
async fn admin_routes_fail_closed() {
    let (state, app) = test_app().await;

    // 无凭证 → 401
    let response = send_json(&app, "GET", "/api/orders", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 乱给凭证 → 401
    let response = send_json(&app, "GET", "/api/orders", Some("not-a-token"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 合法但非管理员 → 403
    let users = UserRepository::new(state.db.clone());
    users
        .create("amy".to_string(), "amy-password", "staff".to_string())
        .await
        .expect("create staff");
    let staff_token = login(&app, "amy", "amy-password").await;

    let response = send_json(&app, "GET", "/api/orders", Some(&staff_token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // 非管理员仍可用需登入的非管理员路由
    let response = send_json(
        &app,
        "GET",
        "/api/notifications/summary",
        Some(&staff_token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn storefront_routes_need_no_token() {
    let (_state, app) = test_app().await;

    for uri in ["/api/products", "/api/categories", "/api/health"] {
        let response = send_json(&app, "GET", uri, None, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri} should be public");
    }
}

#[tokio::test]
async fn root_admin_cannot_be_deleted_even_by_root() {
    let (_state, app) = test_app().await;
    let token = login_root(&app).await;

    let response = send_json(
        &app,
        "DELETE",
        &format!("/api/users/{ROOT_USERNAME}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["message"], "無法刪除最高管理員帳號");
}

#[tokio::test]
async fn user_listing_never_leaks_password_hashes() {
    let (_state, app) = test_app().await;
    let token = login_root(&app).await;

    let response = send_json(&app, "GET", "/api/users", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = read_json(response).await;
    let users = body.as_array().expect("array of users");
    assert!(!users.is_empty());
    for user in users {
        assert!(user.get("passwordHash").is_none());
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn duplicate_username_conflicts_and_missing_user_is_404() {
    let (state, app) = test_app().await;
    let token = login_root(&app).await;

    let payload = serde_json::json!({
        "username": "amy",
        "password": "amy-password",
        "role": "staff",
    });
    let response = send_json(&app, "POST", "/api/users", Some(&token), Some(payload.clone())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send_json(&app, "POST", "/api/users", Some(&token), Some(payload)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let users = UserRepository::new(state.db.clone());
    let err = users
        .delete_by_username("nobody")
        .await
        .expect_err("unknown user");
    assert!(matches!(err, RepoError::NotFound(_)));

    let response = send_json(&app, "DELETE", "/api/users/amy", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn password_rotation_requires_the_current_password() {
    let (_state, app) = test_app().await;
    let token = login_root(&app).await;

    // 目前密码错 → 401
    let response = send_json(
        &app,
        "PATCH",
        "/api/user/password",
        Some(&token),
        Some(serde_json::json!({
            "currentPassword": "wrong",
            "newPassword": "new-password-123",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["message"], "目前的密碼不正確");

    // 正确流程
    let response = send_json(
        &app,
        "PATCH",
        "/api/user/password",
        Some(&token),
        Some(serde_json::json!({
            "currentPassword": common::ROOT_PASSWORD,
            "newPassword": "new-password-123",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // 新密码可登入
    let _new_token = login(&app, ROOT_USERNAME, "new-password-123").await;
}

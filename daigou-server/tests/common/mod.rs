//! 集成测试共用工具：内存数据库状态 + router 级请求辅助

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use daigou_server::auth::JwtConfig;
use daigou_server::core::{Config, NotificationConfig, RootAdminConfig, ServerState};

pub const ROOT_USERNAME: &str = "randy";
pub const ROOT_PASSWORD: &str = "randy1007";

/// 固定配置，不读环境变量
pub fn test_config() -> Config {
    Config {
        work_dir: "/tmp/daigou-test".to_string(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-key-0123456789".to_string(),
            expiration_minutes: 480,
            issuer: "daigou-server".to_string(),
            audience: "daigou-admin".to_string(),
        },
        environment: "test".to_string(),
        timezone: chrono_tz::Asia::Taipei,
        root_admin: RootAdminConfig {
            username: ROOT_USERNAME.to_string(),
            password: ROOT_PASSWORD.to_string(),
        },
        notification: NotificationConfig {
            sendgrid_api_key: None,
            to_email: "ops@example.com".to_string(),
            from_email: "noreply@example.com".to_string(),
            from_name: "代採購大平台通知".to_string(),
        },
    }
}

/// 内存数据库状态 (已种好最高管理员)
pub async fn test_state() -> ServerState {
    ServerState::in_memory(test_config()).await
}

/// 完整路由 (含认证中间件)
pub async fn test_app() -> (ServerState, Router) {
    let state = test_state().await;
    let app = daigou_server::api::router(state.clone());
    (state, app)
}

/// 发送 JSON 请求；token 为 None 时不带 Authorization 头
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    app.clone().oneshot(request).await.expect("response")
}

/// 读出响应 body 并反序列化
pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("valid JSON body")
}

/// 以指定帐密登入，回传 token
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = send_json(
        app,
        "POST",
        "/api/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");

    let body: serde_json::Value = read_json(response).await;
    body["token"].as_str().expect("token in response").to_string()
}

/// 最高管理员登入
pub async fn login_root(app: &Router) -> String {
    login(app, ROOT_USERNAME, ROOT_PASSWORD).await
}

/// 合法订单 payload (两件商品示例)
pub fn sample_order_payload() -> serde_json::Value {
    serde_json::json!({
        "paopaohuId": "PPH-001",
        "email": "buyer@example.com",
        "lastFiveDigits": "54321",
        "totalAmount": 240.0,
        "items": [{
            "productId": "p1",
            "title": "日本零食箱",
            "price": 100.0,
            "serviceFee": 20.0,
            "quantity": 2,
            "notes": ""
        }]
    })
}

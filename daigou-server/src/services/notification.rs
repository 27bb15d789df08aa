//! Notification Dispatcher
//!
//! 新订单/新请求时寄信通知营运者 (SendGrid v3 REST)。
//!
//! Best-effort：未配置 API key 时静默跳过 (仅写日志)；寄送失败
//! 一律吞掉并记错误，绝不回传给 HTTP 呼叫端 —— 订单建立的成败
//! 与邮件投递无关。

use serde_json::json;

use crate::core::config::NotificationConfig;
use shared::models::{Order, PurchaseRequest};

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// 邮件通知服务
#[derive(Clone, Debug)]
pub struct NotificationService {
    client: reqwest::Client,
    config: NotificationConfig,
}

impl NotificationService {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// 新订单通知 (fire-and-forget)
    pub fn notify_order_created(&self, order: &Order) {
        let subject = format!("[新訂單通知] 訂單編號: {}", order.order_id);
        let html = format!(
            "<h2>新訂單通知</h2>\
             <p><strong>訂單編號:</strong> {}</p>\
             <p><strong>跑跑虎ID:</strong> {}</p>\
             <p><strong>總金額:</strong> {} TWD</p>\
             <p>請盡快登入後台處理。</p>",
            order.order_id, order.paopaohu_id, order.total_amount
        );
        self.dispatch(subject, html);
    }

    /// 新代采购请求通知 (fire-and-forget)
    pub fn notify_request_created(&self, request: &PurchaseRequest) {
        let subject = format!("[新代採購請求] 來自: {}", request.contact_info);
        let html = format!(
            "<h2>新代採購請求</h2>\
             <p><strong>聯絡方式:</strong> {}</p>\
             <p><strong>商品名稱:</strong> {}</p>\
             <p>請盡快登入後台處理。</p>",
            request.contact_info, request.product_name
        );
        self.dispatch(subject, html);
    }

    /// 丢到背景任务寄送，呼叫端立即返回
    fn dispatch(&self, subject: String, html: String) {
        let service = self.clone();
        tokio::spawn(async move {
            service.send(&subject, &html).await;
        });
    }

    async fn send(&self, subject: &str, html: &str) {
        let Some(api_key) = self.config.sendgrid_api_key.as_deref() else {
            tracing::info!("SENDGRID_API_KEY 未設定，跳過寄送郵件");
            return;
        };

        let body = json!({
            "personalizations": [{ "to": [{ "email": &self.config.to_email }] }],
            "from": {
                "email": &self.config.from_email,
                "name": &self.config.from_name,
            },
            "subject": subject,
            "content": [{ "type": "text/html", "value": html }],
        });

        let result = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!("郵件通知已成功寄出至: {}", self.config.to_email);
            }
            Ok(resp) => {
                let status = resp.status();
                let detail = resp.text().await.unwrap_or_default();
                tracing::error!(%status, %detail, "寄送郵件時發生錯誤");
            }
            Err(e) => {
                tracing::error!(error = %e, "寄送郵件時發生錯誤");
            }
        }
    }
}

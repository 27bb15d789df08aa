//! Purchase Request Model
//!
//! 「帮我买这个」的代采购请求，与订单是不同的实体：
//! 没有审计记录，也没有删除操作（后台 UI 历来如此）。

use serde::{Deserialize, Serialize};

/// 代采购请求状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[serde(rename = "待報價")]
    PendingQuote,
    #[serde(rename = "已報價")]
    Quoted,
    #[serde(rename = "處理中")]
    Processing,
    #[serde(rename = "已轉訂單")]
    ConvertedToOrder,
    #[serde(rename = "已取消")]
    Cancelled,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::PendingQuote => "待報價",
            RequestStatus::Quoted => "已報價",
            RequestStatus::Processing => "處理中",
            RequestStatus::ConvertedToOrder => "已轉訂單",
            RequestStatus::Cancelled => "已取消",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Purchase request model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub request_id: String,
    /// Unix millis
    pub received_at: i64,
    pub status: RequestStatus,
    /// 后台是否尚未看过这笔请求
    pub is_new: bool,
    pub product_url: String,
    pub product_name: String,
    #[serde(default)]
    pub specs: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paopaohu_id: Option<String>,
    pub contact_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_domain_labels() {
        for status in [
            RequestStatus::PendingQuote,
            RequestStatus::Quoted,
            RequestStatus::Processing,
            RequestStatus::ConvertedToOrder,
            RequestStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).expect("serialize");
            assert_eq!(json, format!("\"{}\"", status.label()));
            let back: RequestStatus = serde_json::from_str(&json).expect("parse");
            assert_eq!(back, status);
        }
    }
}

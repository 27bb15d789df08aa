//! Purchase Request Model (DB)

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::RequestStatus;

/// Purchase request record as stored (`req_…`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub id: Option<RecordId>,
    pub received_at: i64,
    pub status: RequestStatus,
    pub is_new: bool,
    pub product_url: String,
    pub product_name: String,
    #[serde(default)]
    pub specs: String,
    pub quantity: u32,
    #[serde(default)]
    pub paopaohu_id: Option<String>,
    pub contact_info: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<PurchaseRequest> for shared::models::PurchaseRequest {
    fn from(r: PurchaseRequest) -> Self {
        Self {
            request_id: r.id.as_ref().map(|t| t.key().to_string()).unwrap_or_default(),
            received_at: r.received_at,
            status: r.status,
            is_new: r.is_new,
            product_url: r.product_url,
            product_name: r.product_name,
            specs: r.specs,
            quantity: r.quantity,
            paopaohu_id: r.paopaohu_id,
            contact_info: r.contact_info,
            notes: r.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequestContent {
    pub received_at: i64,
    pub status: RequestStatus,
    pub is_new: bool,
    pub product_url: String,
    pub product_name: String,
    pub specs: String,
    pub quantity: u32,
    pub paopaohu_id: Option<String>,
    pub contact_info: String,
    pub notes: Option<String>,
}

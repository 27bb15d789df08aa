//! Site Settings Model (DB, singleton per owner)
//!
//! 记录键就是所属帐号的 username。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use surrealdb::RecordId;

/// Site settings record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    pub id: Option<RecordId>,
    #[serde(default)]
    pub theme: Value,
    #[serde(default)]
    pub layout: Value,
    #[serde(default)]
    pub content: Value,
}

impl From<SiteSettings> for shared::models::SiteSettings {
    fn from(s: SiteSettings) -> Self {
        Self {
            owner: s.id.as_ref().map(|t| t.key().to_string()).unwrap_or_default(),
            theme: s.theme,
            layout: s.layout,
            content: s.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettingsContent {
    pub theme: Value,
    pub layout: Value,
    pub content: Value,
}

//! Site Settings Model (Singleton per owner)
//!
//! 网站主题/版面/文案设定，整包读取、整包覆写。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Site settings entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// 所属后台帐号
    pub owner: String,
    #[serde(default)]
    pub theme: Value,
    #[serde(default)]
    pub layout: Value,
    #[serde(default)]
    pub content: Value,
}

impl SiteSettings {
    /// 尚未储存过设定时回传的空白预设
    pub fn empty(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            theme: Value::Object(Default::default()),
            layout: Value::Object(Default::default()),
            content: Value::Object(Default::default()),
        }
    }
}

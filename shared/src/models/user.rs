//! User Model
//!
//! 后台帐号。密码杂凑只存在于服务端的 DB 模型，这里的 wire 模型
//! 永远不携带。

use serde::{Deserialize, Serialize};

/// 管理员角色名
pub const ROLE_ADMIN: &str = "admin";

/// User model (wire)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

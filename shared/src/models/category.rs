//! Category Model

use serde::{Deserialize, Serialize};

/// Category model
///
/// 分类只是商品上的文字标签来源；删除分类不会连动修改商品。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

//! Category Model (DB)

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Category record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<RecordId>,
    pub name: String,
}

impl From<Category> for shared::models::Category {
    fn from(c: Category) -> Self {
        Self {
            id: c.id.as_ref().map(|t| t.key().to_string()).unwrap_or_default(),
            name: c.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryContent {
    pub name: String,
}

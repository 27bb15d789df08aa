//! Site Settings Repository (singleton per owner)

use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::{SiteSettings, SiteSettingsContent};

const TABLE: &str = "site_settings";

#[derive(Clone)]
pub struct SiteSettingsRepository {
    base: BaseRepository,
}

impl SiteSettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 读取整包设定；尚未储存过时回空白预设
    pub async fn get(&self, owner: &str) -> RepoResult<shared::models::SiteSettings> {
        let settings: Option<SiteSettings> = self.base.db().select((TABLE, owner)).await?;
        Ok(settings
            .map(|s| s.into())
            .unwrap_or_else(|| shared::models::SiteSettings::empty(owner)))
    }

    /// 整包覆写 (不存在则建立)
    pub async fn put(
        &self,
        owner: &str,
        theme: Value,
        layout: Value,
        content: Value,
    ) -> RepoResult<shared::models::SiteSettings> {
        let stored: Option<SiteSettings> = self
            .base
            .db()
            .upsert((TABLE, owner))
            .content(SiteSettingsContent {
                theme,
                layout,
                content,
            })
            .await?;
        Ok(stored
            .map(|s| s.into())
            .unwrap_or_else(|| shared::models::SiteSettings::empty(owner)))
    }
}

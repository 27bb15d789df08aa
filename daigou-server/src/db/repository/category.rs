//! Category Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Category, CategoryContent};
use shared::util::prefixed_id;

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 全部分类，依建立顺序 (id 即时间衍生键)
    pub async fn find_all(&self) -> RepoResult<Vec<shared::models::Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY id ASC")
            .await?
            .take(0)?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Find category by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM category WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    /// 新增分类；名称重复回 409
    pub async fn create(&self, name: String) -> RepoResult<shared::models::Category> {
        if self.find_by_name(&name).await?.is_some() {
            return Err(RepoError::Duplicate("此分類已存在".to_string()));
        }

        let id = prefixed_id("cat_");
        let created: Option<Category> = self
            .base
            .db()
            .create((TABLE, id.as_str()))
            .content(CategoryContent { name })
            .await?;
        created
            .map(|c| c.into())
            .ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    /// 删除分类。引用此分类的商品保留原文字标签 (不连动)。
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let deleted: Option<Category> = self.base.db().delete((TABLE, id)).await?;
        deleted
            .map(|_| ())
            .ok_or_else(|| RepoError::NotFound("找不到該分類".to_string()))
    }
}

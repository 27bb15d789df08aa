//! Product Repository

use rust_decimal::Decimal;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Product, ProductContent, ProductPatch, SortOrderPatch};
use shared::client::{ProductCreate, ProductUpdate};
use shared::models::ProductStatus;
use shared::models::product::default_category;
use shared::util::prefixed_id;

const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 店面商品列表：只取已上架 (缺 status 的旧资料一并视为上架)，
    /// 依 sort_order 升幂
    pub async fn find_published(&self) -> RepoResult<Vec<shared::models::Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query(
                "SELECT * FROM product WHERE status = 'published' OR status = NONE \
                 ORDER BY sort_order ASC",
            )
            .await?
            .take(0)?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// 后台商品列表：不分状态，依 sort_order 升幂
    pub async fn find_all(&self) -> RepoResult<Vec<shared::models::Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY sort_order ASC")
            .await?
            .take(0)?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<shared::models::Product>> {
        let product: Option<Product> = self.base.db().select((TABLE, id)).await?;
        Ok(product.map(|p| p.into()))
    }

    /// 新增商品：sort_order = 现有最大值 + 1 (空目录从 0 开始)
    pub async fn create(&self, data: ProductCreate) -> RepoResult<shared::models::Product> {
        let price = data
            .price
            .ok_or_else(|| RepoError::Validation("商品標題和價格為必填項".to_string()))?;

        let sort_order = self.max_sort_order().await? + 1;

        let content = ProductContent {
            title: data.title,
            category: data.category.unwrap_or_else(default_category),
            price,
            service_fee: data.service_fee.unwrap_or(Decimal::ZERO),
            image_urls: data.image_urls,
            long_description: data.long_description.unwrap_or_default(),
            stock: data.stock.unwrap_or(0),
            status: data.status.unwrap_or(ProductStatus::Published),
            tags: data.tags,
            sort_order,
        };

        let id = prefixed_id("p");
        let created: Option<Product> = self
            .base
            .db()
            .create((TABLE, id.as_str()))
            .content(content)
            .await?;
        created
            .map(|p| p.into())
            .ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// 合并更新：只覆写 payload 中出现的字段
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<shared::models::Product> {
        let patch = ProductPatch::from(data);
        let updated: Option<Product> = self
            .base
            .db()
            .update((TABLE, id))
            .merge(patch)
            .await?;
        updated
            .map(|p| p.into())
            .ok_or_else(|| RepoError::NotFound("找不到該商品".to_string()))
    }

    /// Delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let deleted: Option<Product> = self.base.db().delete((TABLE, id)).await?;
        deleted
            .map(|_| ())
            .ok_or_else(|| RepoError::NotFound("找不到該商品".to_string()))
    }

    /// 手动排序：依序给每个 id 指定 sort_order = 索引值。
    /// 不存在的 id 静默跳过；未列出的商品保留原值。
    /// 每笔一个写入，无跨笔原子性 (与线上行为一致)。
    pub async fn reorder(&self, ordered_ids: &[String]) -> RepoResult<()> {
        for (index, id) in ordered_ids.iter().enumerate() {
            let _: Option<Product> = self
                .base
                .db()
                .update((TABLE, id.as_str()))
                .merge(SortOrderPatch {
                    sort_order: index as i64,
                })
                .await?;
        }
        Ok(())
    }

    /// 目前最大 sort_order；空目录回 -1
    async fn max_sort_order(&self) -> RepoResult<i64> {
        #[derive(Deserialize)]
        struct MaxRow {
            value: i64,
        }

        let row: Option<MaxRow> = self
            .base
            .db()
            .query("SELECT math::max(sort_order) AS value FROM product GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.value).unwrap_or(-1))
    }
}

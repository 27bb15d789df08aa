//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::ProductRepository;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use shared::client::{MessageResponse, ProductCreate, ProductUpdate, ProductUpdated, ReorderRequest};
use shared::models::Product;

/// GET /api/products - 店面商品列表 (已上架，依 sortOrder)
pub async fn list_published(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_published().await?;
    Ok(Json(products))
}

/// GET /api/admin/products - 后台商品列表 (含草稿)
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;
    Ok(Json(products))
}

/// GET /api/products/:id - 单一商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("找不到該商品".to_string()))?;
    Ok(Json(product))
}

/// POST /api/products - 新增商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    if payload.title.trim().is_empty() || payload.price.is_none() {
        return Err(AppError::validation("商品標題和價格為必填項".to_string()));
    }
    validate_required_text(&payload.title, "商品標題", MAX_NAME_LEN)?;
    validate_optional_text(&payload.category, "分類", MAX_NAME_LEN)?;
    validate_optional_text(&payload.long_description, "商品描述", MAX_DESCRIPTION_LEN)?;
    for url in &payload.image_urls {
        validate_required_text(url, "圖片連結", MAX_URL_LEN)?;
    }

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:id - 合并更新 (只覆写出现的字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<ProductUpdated>> {
    validate_optional_text(&payload.title, "商品標題", MAX_NAME_LEN)?;
    validate_optional_text(&payload.category, "分類", MAX_NAME_LEN)?;
    validate_optional_text(&payload.long_description, "商品描述", MAX_DESCRIPTION_LEN)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.update(&id, payload).await?;
    Ok(Json(ProductUpdated {
        message: "商品更新成功".to_string(),
        product,
    }))
}

/// DELETE /api/products/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = ProductRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "商品刪除成功".to_string(),
    }))
}

/// PATCH /api/products/order - 手动排序
///
/// 传入的 id 依序取得 sortOrder = 索引；不存在的 id 静默忽略，
/// 未列出的商品保留原值。
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<Json<MessageResponse>> {
    let repo = ProductRepository::new(state.db.clone());
    repo.reorder(&payload.ordered_ids).await?;
    Ok(Json(MessageResponse {
        message: "商品順序已更新".to_string(),
    }))
}

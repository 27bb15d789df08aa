//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::CategoryRepository;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use shared::client::{CategoryCreate, MessageResponse};
use shared::models::Category;

/// GET /api/categories - 全部分类 (公开)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(Json(categories))
}

/// POST /api/categories - 新增分类；重名回 409
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<(StatusCode, Json<Category>)> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("分類名稱為必填項".to_string()));
    }
    validate_required_text(&payload.name, "分類名稱", MAX_NAME_LEN)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload.name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// DELETE /api/categories/:id - 删除分类
///
/// 引用此分类的商品保留原文字标签 (不连动)。
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = CategoryRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "分類刪除成功".to_string(),
    }))
}

//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_required_text};
use shared::client::{MessageResponse, UserCreate};
use shared::models::User;

/// GET /api/users - 帐号列表 (不含密码杂凑)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let repo = UserRepository::new(state.db.clone());
    let users = repo.find_all().await?;
    Ok(Json(users))
}

/// POST /api/users - 新增帐号；username 重复回 409
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    if payload.username.trim().is_empty()
        || payload.password.is_empty()
        || payload.role.trim().is_empty()
    {
        return Err(AppError::validation("帳號、密碼和角色為必填項".to_string()));
    }
    validate_required_text(&payload.username, "帳號", MAX_NAME_LEN)?;
    if payload.password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation("密碼過長".to_string()));
    }

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .create(payload.username, &payload.password, payload.role)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// DELETE /api/users/:username - 删除帐号
///
/// 最高管理员帐号不可删除，任何人 (包括本人) 都拿到 403。
pub async fn delete(
    State(state): State<ServerState>,
    Path(username): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if username == state.config.root_admin.username {
        return Err(AppError::forbidden("無法刪除最高管理員帳號".to_string()));
    }

    let repo = UserRepository::new(state.db.clone());
    repo.delete_by_username(&username).await?;
    Ok(Json(MessageResponse {
        message: "使用者刪除成功".to_string(),
    }))
}

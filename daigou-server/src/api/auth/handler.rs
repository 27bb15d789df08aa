//! Authentication Handlers
//!
//! Handles login and self-service password rotation

use std::time::Duration;

use axum::{Json, extract::State};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_PASSWORD_LEN, validate_required_text};
use shared::client::{LoginRequest, LoginResponse, MessageResponse, PasswordChangeRequest};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/login - 登入换取 8 小时效期的 Bearer 令牌
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_username(&req.username).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // 统一错误讯息，避免帐号枚举
    let user = match user {
        Some(u) => u,
        None => {
            tracing::warn!(username = %req.username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let password_valid = user
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

    if !password_valid {
        tracing::warn!(username = %req.username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(&user.username, &user.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(username = %user.username, role = %user.role, "User logged in successfully");

    Ok(Json(LoginResponse {
        message: "登入成功".to_string(),
        token,
    }))
}

/// PATCH /api/user/password - 更新自己的密码
///
/// 目前密码验证失败回 401。
pub async fn change_password(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<PasswordChangeRequest>,
) -> AppResult<Json<MessageResponse>> {
    validate_required_text(&req.new_password, "新密碼", MAX_PASSWORD_LEN)?;

    let repo = UserRepository::new(state.db.clone());
    let record = repo
        .find_by_username(&user.username)
        .await?
        .ok_or_else(|| AppError::not_found("找不到該使用者".to_string()))?;

    let current_valid = record
        .verify_password(&req.current_password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

    if !current_valid {
        return Err(AppError::InvalidCredentials("目前的密碼不正確".to_string()));
    }

    repo.update_password(&user.username, &req.new_password)
        .await?;

    tracing::info!(username = %user.username, "Password updated");

    Ok(Json(MessageResponse {
        message: "密碼更新成功！".to_string(),
    }))
}

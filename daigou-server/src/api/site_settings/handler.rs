//! Site Settings Handlers
//!
//! 设定以呼叫者的帐号为键，整包读取、整包覆写。

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::SiteSettingsRepository;
use crate::utils::AppResult;
use shared::client::{MessageResponse, SiteSettingsUpdate};
use shared::models::SiteSettings;

/// GET /api/admin/site-settings - 读取本人站台设定
pub async fn get(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<SiteSettings>> {
    let repo = SiteSettingsRepository::new(state.db.clone());
    let settings = repo.get(&user.username).await?;
    Ok(Json(settings))
}

/// PUT /api/admin/site-settings - 整包覆写本人站台设定
pub async fn put(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<SiteSettingsUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let repo = SiteSettingsRepository::new(state.db.clone());
    repo.put(
        &user.username,
        payload.theme,
        payload.layout,
        payload.content,
    )
    .await?;

    Ok(Json(MessageResponse {
        message: "網站設定已更新".to_string(),
    }))
}

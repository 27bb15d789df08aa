//! User Repository
//!
//! 后台帐号的持久层，含开机时的最高管理员种子逻辑。

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserContent};
use shared::models::user::ROLE_ADMIN;
use shared::util::prefixed_id;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// 全部帐号 (wire 模型不含密码杂凑)
    pub async fn find_all(&self) -> RepoResult<Vec<shared::models::User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user ORDER BY id ASC")
            .await?
            .take(0)?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Find user by username (DB 模型，登入验证要用杂凑)
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let username = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE username = $username LIMIT 1")
            .bind(("username", username))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// 新增帐号；username 重复回 409
    pub async fn create(
        &self,
        username: String,
        password: &str,
        role: String,
    ) -> RepoResult<shared::models::User> {
        if self.find_by_username(&username).await?.is_some() {
            return Err(RepoError::Duplicate("此帳號已存在".to_string()));
        }

        let password_hash = User::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

        let id = prefixed_id("user_");
        let created: Option<User> = self
            .base
            .db()
            .create((TABLE, id.as_str()))
            .content(UserContent {
                username,
                password_hash,
                role,
            })
            .await?;
        created
            .map(|u| u.into())
            .ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// 删除帐号 (最高管理员的保护在 handler 层)
    pub async fn delete_by_username(&self, username: &str) -> RepoResult<()> {
        let user = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| RepoError::NotFound("找不到該使用者".to_string()))?;

        let id = user
            .id
            .ok_or_else(|| RepoError::Database("User record missing id".to_string()))?;
        let _: Option<User> = self.base.db().delete(id).await?;
        Ok(())
    }

    /// 更新密码杂凑
    pub async fn update_password(&self, username: &str, new_password: &str) -> RepoResult<()> {
        let user = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| RepoError::NotFound("找不到該使用者".to_string()))?;

        let password_hash = User::hash_password(new_password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

        let id = user
            .id
            .ok_or_else(|| RepoError::Database("User record missing id".to_string()))?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $user SET password_hash = $hash")
            .bind(("user", id))
            .bind(("hash", password_hash))
            .await?;
        let _: Vec<User> = result.take(0)?;
        Ok(())
    }

    /// 开机种子：最高管理员不存在就建立；角色被改掉则矫正回 admin
    pub async fn ensure_root_admin(&self, username: &str, password: &str) -> RepoResult<()> {
        match self.find_by_username(username).await? {
            None => {
                tracing::warn!("找不到管理者 {username}，正在建立新的帳號...");
                self.create(username.to_string(), password, ROLE_ADMIN.to_string())
                    .await?;
                tracing::info!("管理者 {username} 已成功建立");
            }
            Some(user) if user.role != ROLE_ADMIN => {
                tracing::warn!("將管理者 {username} 的角色更正為 admin...");
                let id = user
                    .id
                    .clone()
                    .ok_or_else(|| RepoError::Database("User record missing id".to_string()))?;
                self.force_admin_role(id).await?;
            }
            Some(_) => {}
        }
        Ok(())
    }

    async fn force_admin_role(&self, id: RecordId) -> RepoResult<()> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $user SET role = $role")
            .bind(("user", id))
            .bind(("role", ROLE_ADMIN.to_string()))
            .await?;
        let _: Vec<User> = result.take(0)?;
        Ok(())
    }
}

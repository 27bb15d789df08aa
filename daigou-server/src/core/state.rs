//! Server State
//!
//! 持有所有服务单例引用的核心结构，`Arc`/浅拷贝共享。

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::UserRepository;
use crate::services::NotificationService;

/// 服务器状态 - 持有所有服务的单例引用
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | 嵌入式数据库 (SurrealDB) |
/// | jwt_service | JWT 认证服务 |
/// | notifier | 邮件通知服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 邮件通知服务
    pub notifier: NotificationService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/daigou.db)
    /// 3. 最高管理员种子
    /// 4. JWT / 通知服务
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("daigou.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let state = Self::assemble(config.clone(), db_service);
        state.seed_root_admin().await;
        state
    }

    /// 测试用：内存数据库，不触碰文件系统
    pub async fn in_memory(config: Config) -> Self {
        let db_service = DbService::memory()
            .await
            .expect("Failed to initialize in-memory database");

        let state = Self::assemble(config, db_service);
        state.seed_root_admin().await;
        state
    }

    fn assemble(config: Config, db_service: DbService) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let notifier = NotificationService::new(config.notification.clone());

        Self {
            config,
            db: db_service.db,
            jwt_service,
            notifier,
        }
    }

    /// 最高管理员种子 (不存在则建立、角色漂移则矫正)
    async fn seed_root_admin(&self) {
        let repo = UserRepository::new(self.db.clone());
        if let Err(e) = repo
            .ensure_root_admin(
                &self.config.root_admin.username,
                &self.config.root_admin.password,
            )
            .await
        {
            tracing::error!("Failed to seed root admin: {e}");
        }
    }
}

//! 服务器配置
//!
//! # 环境变量
//!
//! 所有配置项都可以通过环境变量覆盖：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | WORK_DIR | /var/lib/daigou | 工作目录 (数据库、日志) |
//! | HTTP_PORT | 3000 | HTTP 服务端口 |
//! | ENVIRONMENT | development | 运行环境 |
//! | TIMEZONE | Asia/Taipei | 仪表板统计的业务时区 |
//! | JWT_SECRET | (开发环境自动生成) | JWT 密钥 |
//! | JWT_EXPIRATION_MINUTES | 480 | 令牌有效期 (8 小时) |
//! | ROOT_ADMIN_USERNAME | randy | 最高管理员帐号 |
//! | ROOT_ADMIN_PASSWORD | randy1007 | 种子密码 (仅首次建立时用) |
//! | SENDGRID_API_KEY | (未设) | 未设时跳过寄信 |
//! | NOTIFICATION_EMAIL | rruntiger@gmail.com | 通知收件人 |
//! | FROM_EMAIL | rruntiger@gmail.com | 寄件地址 |
//!
//! # 示例
//!
//! ```ignore
//! WORK_DIR=/data/daigou HTTP_PORT=8080 cargo run
//! ```

use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::utils::logger;

/// 邮件通知配置
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// SendGrid API key；未配置时通知为 no-op
    pub sendgrid_api_key: Option<String>,
    /// 营运者收件地址
    pub to_email: String,
    /// 寄件地址
    pub from_email: String,
    /// 寄件显示名称
    pub from_name: String,
}

impl NotificationConfig {
    fn from_env() -> Self {
        Self {
            sendgrid_api_key: std::env::var("SENDGRID_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            to_email: std::env::var("NOTIFICATION_EMAIL")
                .unwrap_or_else(|_| "rruntiger@gmail.com".into()),
            from_email: std::env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "rruntiger@gmail.com".into()),
            from_name: "代採購大平台通知".to_string(),
        }
    }
}

/// 最高管理员种子配置
#[derive(Debug, Clone)]
pub struct RootAdminConfig {
    /// 受保护的帐号 (不可删除)
    pub username: String,
    /// 首次建立帐号时的密码
    pub password: String,
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 仪表板统计的业务时区
    pub timezone: chrono_tz::Tz,
    /// 最高管理员
    pub root_admin: RootAdminConfig,
    /// 邮件通知
    pub notification: NotificationConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/daigou".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::Asia::Taipei),
            root_admin: RootAdminConfig {
                username: std::env::var("ROOT_ADMIN_USERNAME").unwrap_or_else(|_| "randy".into()),
                password: std::env::var("ROOT_ADMIN_PASSWORD")
                    .unwrap_or_else(|_| "randy1007".into()),
            },
            notification: NotificationConfig::from_env(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 日志目录 (work_dir/logs)
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在不算错误
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

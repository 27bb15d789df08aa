//! Daigou Server - 代采购平台 API 服务
//!
//! # 架构概述
//!
//! 多租户代采购电商平台的后端：店面目录读取、结帐下单、代采购
//! 请求、后台管理与销售统计。
//!
//! # 模块结构
//!
//! ```text
//! daigou-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、管理员授权
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (嵌入式 SurrealDB)
//! ├── services/      # 邮件通知
//! └── utils/         # 错误、日志、时间窗、验证
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, setup_environment};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    ____        _
   / __ \____ _(_)___ _____  __  __
  / / / / __ `/ / __ `/ __ \/ / / /
 / /_/ / /_/ / / /_/ / /_/ / /_/ /
/_____/\__,_/_/\__, /\____/\__,_/
              /____/
    "#
    );
}

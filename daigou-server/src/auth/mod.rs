//! 认证模块
//!
//! JWT 令牌服务、认证/授权中间件与 `CurrentUser` 提取器。

mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};

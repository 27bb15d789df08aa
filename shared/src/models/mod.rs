//! 领域模型
//!
//! 与店面 JSON 契约一致 (camelCase 字段)。

pub mod category;
pub mod order;
pub mod product;
pub mod purchase_request;
pub mod site_settings;
pub mod user;

pub use category::Category;
pub use order::{ActivityEntry, Order, OrderItem, OrderStatus};
pub use product::{Product, ProductStatus};
pub use purchase_request::{PurchaseRequest, RequestStatus};
pub use site_settings::SiteSettings;
pub use user::User;

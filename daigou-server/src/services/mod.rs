//! 服务模块

pub mod notification;

pub use notification::NotificationService;

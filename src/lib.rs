//! # CI/CD 沙箱 API
//!
//! 一组返回固定或简单推导 JSON 的 HTTP 路由：
//! - `/`、`/test` 服务信息
//! - `/health` 健康检查
//! - `/api/users` 固定用户名单与不落库的创建接口
//!
//! `router::create_router` 构造完整路由而不打开端口，
//! `server::serve` 负责监听。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod router;
pub mod server;

pub use app::{info::BuildInfo, AppState};
pub use config::Config;
pub use router::create_router;

use thiserror::Error;

/// 错误类型定义
#[derive(Debug, Error)]
pub enum Error {
    #[error("配置读取失败: {0}")]
    Config(#[from] envy::Error),
    #[error("配置无效: {0}")]
    InvalidConfig(String),
    #[error("日志初始化失败: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

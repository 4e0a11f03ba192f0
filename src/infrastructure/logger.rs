//! 日志基础设施

use tracing_subscriber::{
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

pub struct Logger;

impl Logger {
    /// `RUST_LOG` 优先，否则使用 `default_level`；全局订阅者已存在时返回错误
    pub fn init(default_level: &str) -> Result<(), TryInitError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish()
            .try_init()
    }
}

//! 应用层

pub mod info;
pub mod users;

use std::time::Instant;

use info::{BuildInfo, InfoService};
use users::UserService;

/// 处理器共享的只读状态
#[derive(Debug, Clone)]
pub struct AppState {
    pub info_service: InfoService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(environment: impl Into<String>, build: BuildInfo, started_at: Instant) -> Self {
        Self {
            info_service: InfoService::new(environment, build, started_at),
            user_service: UserService::new(),
        }
    }
}

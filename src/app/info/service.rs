//! 服务信息业务服务

use std::{sync::Arc, time::Instant};

use thiserror::Error;

use super::model::{HealthReport, ServerInfo};
use crate::core::{error::CoreError, response::iso_timestamp};
use crate::infrastructure::system::ProcessMemory;

pub const SERVER_MESSAGE: &str = "Express CI/CD Sandbox API";
pub const FALLBACK_VERSION: &str = "1.0.0";

/// 版本号查询失败
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("package version metadata is unavailable")]
    Unavailable,
}

impl From<VersionError> for CoreError {
    fn from(err: VersionError) -> Self {
        CoreError::Internal(err.to_string())
    }
}

/// 构建信息，启动时注入
#[derive(Debug, Clone, Default)]
pub struct BuildInfo {
    version: Option<String>,
}

impl BuildInfo {
    /// 读取编译期的包版本号
    pub fn from_package() -> Self {
        Self {
            version: option_env!("CARGO_PKG_VERSION")
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        }
    }

    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
        }
    }

    /// 没有版本元数据的构建
    pub fn unavailable() -> Self {
        Self { version: None }
    }

    pub fn version(&self) -> Result<&str, VersionError> {
        self.version.as_deref().ok_or(VersionError::Unavailable)
    }
}

#[derive(Debug)]
struct Inner {
    environment: String,
    build: BuildInfo,
    started_at: Instant,
}

/// 服务信息与健康检查
#[derive(Debug, Clone)]
pub struct InfoService {
    inner: Arc<Inner>,
}

impl InfoService {
    pub fn new(environment: impl Into<String>, build: BuildInfo, started_at: Instant) -> Self {
        Self {
            inner: Arc::new(Inner {
                environment: environment.into(),
                build,
                started_at,
            }),
        }
    }

    pub fn environment(&self) -> &str {
        &self.inner.environment
    }

    /// 版本号缺失时回退到 `FALLBACK_VERSION`
    pub fn server_info_or_default(&self) -> ServerInfo {
        let version = self.inner.build.version().unwrap_or(FALLBACK_VERSION);
        self.info_with_version(version)
    }

    /// 版本号缺失时把错误向上抛出
    pub fn server_info(&self) -> Result<ServerInfo, VersionError> {
        let version = self.inner.build.version()?;
        Ok(self.info_with_version(version))
    }

    fn info_with_version(&self, version: &str) -> ServerInfo {
        ServerInfo {
            message: SERVER_MESSAGE.to_string(),
            environment: self.inner.environment.clone(),
            version: version.to_string(),
            timestamp: iso_timestamp(),
        }
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_string(),
            uptime: self.inner.started_at.elapsed().as_secs_f64(),
            memory: ProcessMemory::snapshot(),
            environment: self.inner.environment.clone(),
        }
    }
}

//! 服务信息数据模型

use serde::{Deserialize, Serialize};

use crate::infrastructure::system::ProcessMemory;

/// `/` 与 `/test` 返回的服务信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub message: String,
    pub environment: String,
    pub version: String,
    pub timestamp: String,
}

/// `/health` 返回的健康报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    /// 进程启动以来的秒数
    pub uptime: f64,
    pub memory: ProcessMemory,
    pub environment: String,
}

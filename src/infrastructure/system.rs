//! 进程资源信息

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// 当前进程的内存占用（字节）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMemory {
    pub rss: u64,
    pub vms: u64,
}

impl ProcessMemory {
    /// 读取失败时返回全零
    pub fn snapshot() -> Self {
        let Ok(pid) = sysinfo::get_current_pid() else {
            return Self::default();
        };

        let mut system = System::new();
        if !system.refresh_process(pid) {
            return Self::default();
        }

        system
            .process(pid)
            .map(|process| Self {
                rss: process.memory(),
                vms: process.virtual_memory(),
            })
            .unwrap_or_default()
    }
}

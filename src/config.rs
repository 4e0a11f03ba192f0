//! 应用配置，启动时从环境变量读取一次

use serde::Deserialize;

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP 监听端口 (`PORT`)
    #[serde(default = "default_port")]
    pub port: u16,

    /// 运行环境名称 (`NODE_ENV`)
    #[serde(default = "default_environment")]
    pub node_env: String,

    /// 绑定地址 (`HOST`)
    #[serde(default = "default_host")]
    pub host: String,

    /// 默认日志级别 (`RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// 静态文件挂载路径 (`STATIC_PREFIX`)，未设置时不挂载
    #[serde(default)]
    pub static_prefix: Option<String>,

    /// 静态文件目录 (`STATIC_DIR`)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

/// 静态文件不能挂在这些路径上
const RESERVED_PREFIXES: &[&str] = &["/test", "/health", "/api"];

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            node_env: default_environment(),
            host: default_host(),
            rust_log: default_log_level(),
            static_prefix: None,
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// 先读取 `.env` 文件，再读取进程环境变量
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        // 跳过非 UTF-8 的变量
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        Self::from_vars(vars)
    }

    /// 空值视为未设置
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars.into_iter().filter(|(_, v)| !v.trim().is_empty()))
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.static_prefix {
            if !prefix.starts_with('/') {
                return Err("STATIC_PREFIX must start with '/'".to_string());
            }

            let trimmed = prefix.trim_end_matches('/');
            let reserved = trimmed.is_empty()
                || RESERVED_PREFIXES
                    .iter()
                    .any(|r| trimmed == *r || trimmed.starts_with(&format!("{}/", r)));
            if reserved {
                return Err(format!("STATIC_PREFIX '{}' collides with an API route", prefix));
            }
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.node_env, "development");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.rust_log, "info");
        assert!(config.static_prefix.is_none());
        assert_eq!(config.static_dir, "public");
    }

    #[test]
    fn reads_port_and_environment() {
        let config =
            Config::from_vars(vars(&[("PORT", "8081"), ("NODE_ENV", "production")])).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.node_env, "production");
        assert_eq!(config.bind_address(), "0.0.0.0:8081");
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = Config::from_vars(vars(&[("PORT", ""), ("NODE_ENV", " ")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.node_env, "development");
    }

    #[test]
    fn non_numeric_port_is_an_error() {
        assert!(Config::from_vars(vars(&[("PORT", "abc")])).is_err());
    }

    #[test]
    fn validate_static_prefix() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.static_prefix = Some("/public".to_string());
        assert!(config.validate().is_ok());

        for bad in ["public", "/", "/api", "/api/users", "/health/", "/test"] {
            config.static_prefix = Some(bad.to_string());
            assert!(config.validate().is_err(), "{} should be rejected", bad);
        }
    }
}

//! 配置管理模块
//!
//! 支持多层配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// 翻译服务配置
///
/// 成就文案以源语言（canonical_lang）撰写，非源语言用户的报告
/// 通过外部翻译服务按需转换。endpoint 为空时使用本地直通实现。
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    /// 翻译服务 HTTP 端点，为空时禁用远程翻译
    pub endpoint: Option<String>,
    /// 成就文案的源语言
    pub canonical_lang: String,
    /// 单次翻译请求的超时（秒）
    pub timeout_seconds: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            canonical_lang: "ru".to_string(),
            timeout_seconds: 5,
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 日志输出格式：json（结构化）或 pretty（人类可读）
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub server: ServerConfig,
    pub translation: TranslationConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. 环境变量（ACHIEVE_ 前缀，如 ACHIEVE_SERVER_PORT -> server.port）
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("ACHIEVE_ENV").unwrap_or_else(|_| "development".to_string());

        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = Config::builder()
            // 默认配置
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            // 加载默认配置文件
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false))
            // 加载环境特定配置
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", env))).required(false),
            )
            // 环境变量覆盖（ACHIEVE_SERVER_PORT -> server.port）
            .add_source(
                Environment::with_prefix("ACHIEVE")
                    .separator("_")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.translation.canonical_lang, "ru");
        assert!(config.translation.endpoint.is_none());
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            ..Default::default()
        };
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_is_production() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..Default::default()
        };
        assert!(config.is_production());
        assert!(!AppConfig::default().is_production());
    }
}

//! 共享库
//!
//! 包含各服务共用的配置加载、错误处理和日志初始化等基础设施代码。

pub mod config;
pub mod error;
pub mod observability;

//! 统一错误处理模块
//!
//! 定义系统中所有共享的错误类型，使用 thiserror 提供良好的错误信息。
//! 上层服务根据错误类型决定向调用方返回的 HTTP 状态码或本地降级策略。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum AchieveError {
    // ==================== 数据访问错误 ====================
    #[error("记录未找到: {entity} id={id}")]
    NotFound { entity: String, id: i64 },

    // ==================== 验证错误 ====================
    #[error("参数验证失败: {0}")]
    Validation(String),

    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    // ==================== 外部服务错误 ====================
    #[error("外部服务错误: {service} - {message}")]
    Adapter { service: String, message: String },

    // ==================== 通用错误 ====================
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, AchieveError>;

impl AchieveError {
    /// 便捷构造：记录未找到
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id,
        }
    }

    /// 便捷构造：外部服务错误
    pub fn adapter(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Adapter {
            service: service.into(),
            message: message.into(),
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Adapter { .. } => "ADAPTER_FAILURE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 是否为可恢复错误
    ///
    /// 外部翻译服务的失败不应中断整份报告，调用方可降级为原文。
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Adapter { .. })
    }
}

//! 服务层错误到 HTTP 响应的映射
//!
//! 共享错误类型在此转换为状态码和统一的 JSON 错误体。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use achieve_shared::error::AchieveError;

/// API 错误
///
/// 对共享错误的薄封装，handler 直接 `?` 传播。
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub AchieveError);

impl ApiError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            AchieveError::NotFound { .. } => StatusCode::NOT_FOUND,
            AchieveError::Validation(_) | AchieveError::InvalidArgument { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AchieveError::Adapter { .. } => StatusCode::BAD_GATEWAY,
            AchieveError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 内部错误只返回通用提示，详细信息仅记录日志
        let message = match &self.0 {
            AchieveError::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "error": {
                "code": self.0.code(),
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

/// handler 层 Result 类型别名
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError(AchieveError::not_found("User", 1));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let validation = ApiError(AchieveError::Validation("bad".to_string()));
        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let adapter = ApiError(AchieveError::adapter("translate", "down"));
        assert_eq!(adapter.status_code(), StatusCode::BAD_GATEWAY);
    }
}

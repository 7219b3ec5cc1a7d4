//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API 错误
///
/// 错误分类与处理策略：
/// - 请求不合法 → 400
/// - 上游服务非成功响应 → 502，携带状态码与响应体文本，不重试
/// - 存储/内部错误 → 500
/// 所有失败都中止请求并返回给调用方
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    UpstreamFailure(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::UpstreamFailure(msg) => {
                tracing::error!(error = %msg, "Upstream provider failure");
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::ExternalServiceError(msg) => ApiError::UpstreamFailure(msg),
            ApplicationError::StorageError(msg) => ApiError::Internal(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let api_error: ApiError = ApplicationError::validation("url cannot be empty").into();
        assert!(matches!(api_error, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_external_service_maps_to_upstream_failure() {
        let api_error: ApiError =
            ApplicationError::ExternalServiceError("HTTP 500".to_string()).into();
        assert!(matches!(api_error, ApiError::UpstreamFailure(_)));
    }

    #[test]
    fn test_storage_maps_to_internal() {
        let api_error: ApiError = ApplicationError::StorageError("disk full".to_string()).into();
        assert!(matches!(api_error, ApiError::Internal(_)));
    }
}

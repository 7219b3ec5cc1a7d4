//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{BlobStoreError, SpeechError, SummaryError};

/// 应用层错误
///
/// 所有失败都不可恢复：任何错误都会中止本次请求并返回给调用方
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<SummaryError> for ApplicationError {
    fn from(err: SummaryError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<SpeechError> for ApplicationError {
    fn from(err: SpeechError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<BlobStoreError> for ApplicationError {
    fn from(err: BlobStoreError) -> Self {
        Self::StorageError(err.to_string())
    }
}

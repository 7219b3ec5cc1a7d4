//! Summary Provider Port - 摘要服务抽象
//!
//! 定义外部摘要 API 的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 摘要服务返回成功但结果为空时使用的占位文稿
pub const NO_SUMMARY_FOUND: &str = "No summary found";

/// 摘要服务错误
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: HTTP {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Summary Provider Port
///
/// 外部摘要服务的抽象接口
#[async_trait]
pub trait SummaryProviderPort: Send + Sync {
    /// 获取指定 URL 的摘要文稿
    ///
    /// 服务返回成功但没有可用摘要时，返回 [`NO_SUMMARY_FOUND`]；
    /// 服务返回非成功状态时报错，不做重试
    async fn summarize(&self, url: &str) -> Result<String, SummaryError>;
}

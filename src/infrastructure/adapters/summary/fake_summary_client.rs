//! Fake Summary Client - 用于测试的摘要客户端
//!
//! 始终返回固定文稿，不实际调用摘要服务

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{SummaryError, SummaryProviderPort};

/// Fake Summary Client
///
/// 返回固定文稿或固定错误，并记录调用次数
pub struct FakeSummaryClient {
    script: String,
    fail: bool,
    calls: AtomicUsize,
}

impl FakeSummaryClient {
    /// 创建返回固定文稿的客户端
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// 创建始终失败的客户端
    pub fn failing() -> Self {
        Self {
            script: String::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// 已发生的调用次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummaryProviderPort for FakeSummaryClient {
    async fn summarize(&self, url: &str) -> Result<String, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(url = %url, fail = self.fail, "FakeSummaryClient called");

        if self.fail {
            return Err(SummaryError::ServiceError {
                status: 500,
                body: "fake summary failure".to_string(),
            });
        }

        Ok(self.script.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_fixed_script_and_counts_calls() {
        let client = FakeSummaryClient::new("a script");
        assert_eq!(client.summarize("https://a").await.unwrap(), "a script");
        assert_eq!(client.summarize("https://b").await.unwrap(), "a script");
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_client_reports_service_error() {
        let client = FakeSummaryClient::failing();
        let result = client.summarize("https://a").await;
        assert!(matches!(
            result,
            Err(SummaryError::ServiceError { status: 500, .. })
        ));
        assert_eq!(client.call_count(), 1);
    }
}

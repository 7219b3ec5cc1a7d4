//! HTTP Summary Client - 调用外部摘要服务
//!
//! 实现 SummaryProviderPort trait，通过 HTTP 调用 Exa 风格的内容摘要 API
//!
//! 外部摘要 API:
//! POST {base_url}/contents
//! Header: x-api-key
//! Request: {"ids": [url], "summary": {"query": "..."}}  (JSON)
//! Response: {"results": [{"summary": "..."}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{SummaryError, SummaryProviderPort, NO_SUMMARY_FOUND};

/// 摘要生成使用的固定提示词
pub const SUMMARY_PROMPT: &str = "Act as a youthful podcaster. Write a concise, naturally spoken, and engaging summary with an insight for your tech savvy audience start with the hook: Ever ...";

/// 摘要请求体 (JSON)
#[derive(Debug, Serialize)]
struct ContentsRequest {
    /// 要摘要的页面 URL 列表（本服务每次只传一个）
    ids: Vec<String>,
    summary: SummaryQuery,
}

#[derive(Debug, Serialize)]
struct SummaryQuery {
    query: String,
}

/// 摘要响应体 (JSON)
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    #[serde(default)]
    results: Vec<ContentsResult>,
}

#[derive(Debug, Deserialize)]
struct ContentsResult {
    #[serde(default)]
    summary: Option<String>,
}

impl ContentsResponse {
    /// 提取第一条结果的摘要
    ///
    /// 服务返回成功但没有可用结果时，按占位文稿处理
    fn into_script(self) -> String {
        self.results
            .into_iter()
            .next()
            .and_then(|r| r.summary)
            .unwrap_or_else(|| NO_SUMMARY_FOUND.to_string())
    }
}

/// HTTP 摘要客户端配置
#[derive(Debug, Clone)]
pub struct HttpSummaryClientConfig {
    /// 摘要服务基础 URL
    pub base_url: String,
    /// API key（x-api-key 请求头）
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpSummaryClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.exa.ai".to_string(),
            api_key: String::new(),
            timeout_secs: 120,
        }
    }
}

impl HttpSummaryClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 摘要客户端
pub struct HttpSummaryClient {
    client: Client,
    config: HttpSummaryClientConfig,
}

impl HttpSummaryClient {
    /// 创建新的 HTTP 摘要客户端
    pub fn new(config: HttpSummaryClientConfig) -> Result<Self, SummaryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SummaryError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取摘要接口 URL
    fn contents_url(&self) -> String {
        format!("{}/contents", self.config.base_url)
    }
}

#[async_trait]
impl SummaryProviderPort for HttpSummaryClient {
    async fn summarize(&self, url: &str) -> Result<String, SummaryError> {
        let request = ContentsRequest {
            ids: vec![url.to_string()],
            summary: SummaryQuery {
                query: SUMMARY_PROMPT.to_string(),
            },
        };

        tracing::debug!(url = %url, endpoint = %self.contents_url(), "Sending summary request");

        let response = self
            .client
            .post(self.contents_url())
            .header("x-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SummaryError::Timeout
                } else if e.is_connect() {
                    SummaryError::NetworkError(format!(
                        "Cannot connect to summary service: {}",
                        e
                    ))
                } else {
                    SummaryError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Summary request failed");
            return Err(SummaryError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let contents: ContentsResponse = response
            .json()
            .await
            .map_err(|e| SummaryError::InvalidResponse(e.to_string()))?;

        let script = contents.into_script();

        tracing::info!(url = %url, script_len = script.len(), "Summary fetched");

        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpSummaryClientConfig::default();
        assert_eq!(config.base_url, "https://api.exa.ai");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpSummaryClientConfig::new("http://localhost:9000", "key").with_timeout(30);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_request_body_shape() {
        let request = ContentsRequest {
            ids: vec!["https://example.com".to_string()],
            summary: SummaryQuery {
                query: SUMMARY_PROMPT.to_string(),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["ids"][0], "https://example.com");
        assert_eq!(value["summary"]["query"], SUMMARY_PROMPT);
    }

    #[test]
    fn test_response_extracts_first_summary() {
        let response: ContentsResponse = serde_json::from_str(
            r#"{"results": [{"summary": "first"}, {"summary": "second"}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_script(), "first");
    }

    #[test]
    fn test_empty_results_yield_sentinel() {
        let response: ContentsResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(response.into_script(), NO_SUMMARY_FOUND);
    }

    #[test]
    fn test_missing_summary_field_yields_sentinel() {
        let response: ContentsResponse =
            serde_json::from_str(r#"{"results": [{"id": "x"}]}"#).unwrap();
        assert_eq!(response.into_script(), NO_SUMMARY_FOUND);
    }
}

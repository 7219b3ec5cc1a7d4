//! Summary Adapter - 摘要服务客户端实现

mod fake_summary_client;
mod http_summary_client;

pub use fake_summary_client::FakeSummaryClient;
pub use http_summary_client::{HttpSummaryClient, HttpSummaryClientConfig, SUMMARY_PROMPT};

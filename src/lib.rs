//! Artichoke - 网页摘要语音播报服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Descriptor: 摘要描述符值对象
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SummaryProvider, SpeechSynthesis, BlobStore）
//! - Commands: 命令处理器（GenerateSummary）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 静态文件服务
//! - Adapters: 摘要客户端、TTS 客户端、Blob 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SummaryProvider、SpeechSynthesis、BlobStore）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::GenerateSummaryHandler, GenerateSummaryCommand, SummaryOutcome,
};

pub use error::ApplicationError;

pub use ports::{
    // Blob store
    audio_path,
    descriptor_path,
    fingerprint,
    BlobStoreError,
    BlobStorePort,
    // Speech synthesis
    SpeechAudio,
    SpeechError,
    SpeechSynthesisPort,
    // Summary provider
    SummaryError,
    SummaryProviderPort,
    NO_SUMMARY_FOUND,
};

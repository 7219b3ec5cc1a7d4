//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod blob_store;
mod speech_synthesis;
mod summary_provider;

pub use blob_store::{
    audio_path, descriptor_path, fingerprint, BlobStoreError, BlobStorePort,
};
pub use speech_synthesis::{SpeechAudio, SpeechError, SpeechSynthesisPort};
pub use summary_provider::{SummaryError, SummaryProviderPort, NO_SUMMARY_FOUND};

//! Speech Synthesis Port - 语音合成服务抽象
//!
//! 定义外部 TTS API 的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: HTTP {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成结果
///
/// 音频编码由 TTS 服务通过响应头声明，这里只透传
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    /// 音频字节
    pub data: Vec<u8>,
    /// 服务声明的 Content-Type
    pub content_type: String,
}

/// Speech Synthesis Port
///
/// 外部语音合成服务的抽象接口。
/// 音色名不在本地校验，不被服务识别时由服务报错
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// 将文稿合成为语音
    async fn synthesize(&self, text: &str, voice: &str) -> Result<SpeechAudio, SpeechError>;
}

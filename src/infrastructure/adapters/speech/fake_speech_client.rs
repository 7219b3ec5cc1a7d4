//! Fake Speech Client - 用于测试的语音合成客户端
//!
//! 始终返回固定音频字节，不实际调用 TTS 服务

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{SpeechAudio, SpeechError, SpeechSynthesisPort};

/// Fake Speech Client
///
/// 返回固定音频或固定错误，并记录调用次数
pub struct FakeSpeechClient {
    audio: Vec<u8>,
    content_type: String,
    fail: bool,
    calls: AtomicUsize,
}

impl FakeSpeechClient {
    /// 创建返回固定音频的客户端
    pub fn new(audio: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            audio,
            content_type: content_type.into(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// 创建始终失败的客户端
    pub fn failing() -> Self {
        Self {
            audio: Vec::new(),
            content_type: String::new(),
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
impl SpeechSynthesisPort for FakeSpeechClient {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<SpeechAudio, SpeechError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(
            text_len = text.len(),
            voice = %voice,
            fail = self.fail,
            "FakeSpeechClient called"
        );

        if self.fail {
            return Err(SpeechError::ServiceError {
                status: 500,
                body: "fake speech failure".to_string(),
            });
        }

        Ok(SpeechAudio {
            data: self.audio.clone(),
            content_type: self.content_type.clone(),
        })
    }
}

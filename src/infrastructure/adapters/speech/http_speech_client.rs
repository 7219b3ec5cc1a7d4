//! HTTP Speech Client - 调用外部语音合成服务
//!
//! 实现 SpeechSynthesisPort trait，通过 HTTP 调用 OpenAI 风格的语音合成 API
//!
//! 外部 TTS API:
//! POST {base_url}/v1/audio/speech
//! Header: Authorization: Bearer {api_key}
//! Request: {"model": "tts-1", "input": "...", "voice": "nova"}  (JSON)
//! Response: 音频二进制，编码由 Content-Type 响应头声明

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechAudio, SpeechError, SpeechSynthesisPort};

/// Content-Type 响应头缺失时的回退值
const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// 语音合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SpeechRequest {
    /// TTS 模型名
    model: String,
    /// 要合成的文稿
    input: String,
    /// 音色名（不在本地校验，交由服务识别）
    voice: String,
}

/// HTTP 语音合成客户端配置
#[derive(Debug, Clone)]
pub struct HttpSpeechClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// API key（Bearer 认证）
    pub api_key: String,
    /// TTS 模型名
    pub model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpSpeechClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "tts-1".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpSpeechClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 语音合成客户端
pub struct HttpSpeechClient {
    client: Client,
    config: HttpSpeechClientConfig,
}

impl HttpSpeechClient {
    /// 创建新的 HTTP 语音合成客户端
    pub fn new(config: HttpSpeechClientConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成接口 URL
    fn speech_url(&self) -> String {
        format!("{}/v1/audio/speech", self.config.base_url)
    }
}

#[async_trait]
impl SpeechSynthesisPort for HttpSpeechClient {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<SpeechAudio, SpeechError> {
        let request = SpeechRequest {
            model: self.config.model.clone(),
            input: text.to_string(),
            voice: voice.to_string(),
        };

        tracing::debug!(
            endpoint = %self.speech_url(),
            text_len = text.len(),
            voice = %voice,
            "Sending speech request"
        );

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else if e.is_connect() {
                    SpeechError::NetworkError(format!(
                        "Cannot connect to speech service: {}",
                        e
                    ))
                } else {
                    SpeechError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Speech request failed");
            return Err(SpeechError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        // 音频编码由服务通过响应头声明，原样透传
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
            .to_string();

        let data = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            audio_size = data.len(),
            content_type = %content_type,
            voice = %voice,
            "Speech synthesis completed"
        );

        Ok(SpeechAudio { data, content_type })
    }
}

//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
///
/// 启动时构造一次，之后只读传递给各个组件
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 摘要服务配置
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// 语音合成服务配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL（用于拼接 mp3 地址）
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// 摘要服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerConfig {
    /// 摘要服务基础 URL
    #[serde(default = "default_summarizer_url")]
    pub url: String,

    /// API key（x-api-key 请求头）
    #[serde(default)]
    pub api_key: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: u64,
}

fn default_summarizer_url() -> String {
    "https://api.exa.ai".to_string()
}

fn default_provider_timeout() -> u64 {
    120
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            url: default_summarizer_url(),
            api_key: String::new(),
            timeout_secs: default_provider_timeout(),
        }
    }
}

/// 语音合成服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// TTS 服务基础 URL
    #[serde(default = "default_speech_url")]
    pub url: String,

    /// API key（Bearer 认证）
    #[serde(default)]
    pub api_key: String,

    /// TTS 模型名
    #[serde(default = "default_speech_model")]
    pub model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: u64,
}

fn default_speech_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_speech_model() -> String {
    "tts-1".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            url: default_speech_url(),
            api_key: String::new(),
            model: default_speech_model(),
            timeout_secs: default_provider_timeout(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Blob 存储根目录
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// 对象路径前缀
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/blobs")
}

fn default_prefix() -> String {
    "artichoke".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            prefix: default_prefix(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

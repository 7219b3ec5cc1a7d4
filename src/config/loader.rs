//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `ARTICHOKE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `ARTICHOKE_SERVER__PORT=8080`
/// - `ARTICHOKE_SUMMARIZER__API_KEY=exa-...`
/// - `ARTICHOKE_SPEECH__API_KEY=sk-...`
/// - `ARTICHOKE_STORAGE__DATA_DIR=/data/blobs`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("summarizer.url", "https://api.exa.ai")?
        .set_default("summarizer.api_key", "")?
        .set_default("summarizer.timeout_secs", 120)?
        .set_default("speech.url", "https://api.openai.com")?
        .set_default("speech.api_key", "")?
        .set_default("speech.model", "tts-1")?
        .set_default("speech.timeout_secs", 120)?
        .set_default("storage.data_dir", "data/blobs")?
        .set_default("storage.prefix", "artichoke")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: ARTICHOKE_
    // 层级分隔符: __ (双下划线)
    // 例如: ARTICHOKE_SPEECH__API_KEY=sk-xxx
    builder = builder.add_source(
        Environment::with_prefix("ARTICHOKE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证 provider URL
    if config.summarizer.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Summarizer URL cannot be empty".to_string(),
        ));
    }

    if config.speech.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech URL cannot be empty".to_string(),
        ));
    }

    // 验证存储前缀（作为路径片段使用）
    if config.storage.prefix.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage prefix cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
///
/// API key 不打印内容，只打印是否已配置
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!("Summarizer URL: {}", config.summarizer.url);
    tracing::info!(
        "Summarizer API Key: {}",
        if config.summarizer.api_key.is_empty() { "(unset)" } else { "(set)" }
    );
    tracing::info!("Speech URL: {}", config.speech.url);
    tracing::info!("Speech Model: {}", config.speech.model);
    tracing::info!(
        "Speech API Key: {}",
        if config.speech.api_key.is_empty() { "(unset)" } else { "(set)" }
    );
    tracing::info!("Data Directory: {:?}", config.storage.data_dir);
    tracing::info!("Storage Prefix: {}", config.storage.prefix);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_summarizer_url() {
        let mut config = AppConfig::default();
        config.summarizer.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_speech_url() {
        let mut config = AppConfig::default();
        config.speech.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_prefix() {
        let mut config = AppConfig::default();
        config.storage.prefix = String::new();
        assert!(validate_config(&config).is_err());
    }
}

//! Artichoke - 网页摘要语音播报服务
//!
//! 请求流程：
//! 1. 根据 (url, voice) 计算缓存指纹
//! 2. 命中缓存则原样返回存储的描述符 JSON
//! 3. 否则调用摘要服务生成文稿，再调用 TTS 合成语音，
//!    先后写入音频和描述符，返回描述符

use std::sync::Arc;

use artichoke::config::{load_config, print_config};
use artichoke::infrastructure::adapters::{
    FileBlobStore, HttpSpeechClient, HttpSpeechClientConfig, HttpSummaryClient,
    HttpSummaryClientConfig,
};
use artichoke::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},artichoke={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Artichoke - 网页摘要语音播报服务");
    print_config(&config);

    // 创建 Blob 存储（确保数据目录存在）
    let blob_store = Arc::new(
        FileBlobStore::new(&config.storage.data_dir, config.server.public_base_url()).await?,
    );

    // 创建摘要客户端
    let summary_config = HttpSummaryClientConfig {
        base_url: config.summarizer.url.clone(),
        api_key: config.summarizer.api_key.clone(),
        timeout_secs: config.summarizer.timeout_secs,
    };
    let summary_provider = Arc::new(HttpSummaryClient::new(summary_config)?);

    // 创建语音合成客户端
    let speech_config = HttpSpeechClientConfig {
        base_url: config.speech.url.clone(),
        api_key: config.speech.api_key.clone(),
        model: config.speech.model.clone(),
        timeout_secs: config.speech.timeout_secs,
    };
    let speech = Arc::new(HttpSpeechClient::new(speech_config)?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        &config.storage.data_dir,
    );
    let state = AppState::new(
        summary_provider,
        speech,
        blob_store,
        config.storage.prefix.clone(),
    );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

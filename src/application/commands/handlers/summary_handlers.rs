//! Summary Command Handlers - 摘要生成用例

use std::sync::Arc;

use crate::application::commands::{GenerateSummaryCommand, SummaryOutcome};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    audio_path, descriptor_path, fingerprint, BlobStorePort, SpeechSynthesisPort,
    SummaryProviderPort,
};
use crate::domain::Descriptor;

/// GenerateSummary Handler - 生成（或命中缓存返回）摘要描述符
///
/// 流程为线性串行：缓存查询 → 摘要 → 合成 → 写音频 → 写描述符。
/// 无锁：同一指纹的并发 miss 会各自完整执行一遍，写入为
/// last-write-wins，重复劳动但不产生损坏
pub struct GenerateSummaryHandler {
    summary_provider: Arc<dyn SummaryProviderPort>,
    speech: Arc<dyn SpeechSynthesisPort>,
    blob_store: Arc<dyn BlobStorePort>,
    /// 存储路径前缀，如 "artichoke"
    prefix: String,
}

impl GenerateSummaryHandler {
    pub fn new(
        summary_provider: Arc<dyn SummaryProviderPort>,
        speech: Arc<dyn SpeechSynthesisPort>,
        blob_store: Arc<dyn BlobStorePort>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            summary_provider,
            speech,
            blob_store,
            prefix: prefix.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateSummaryCommand,
    ) -> Result<SummaryOutcome, ApplicationError> {
        if cmd.url.is_empty() {
            return Err(ApplicationError::validation("url cannot be empty"));
        }

        let fp = fingerprint(&cmd.url, &cmd.voice);
        let descriptor_path = descriptor_path(&self.prefix, &fp);
        let audio_path = audio_path(&self.prefix, &fp);

        // 缓存命中：原样返回存储的 JSON，不校验 url/voice 是否与请求一致。
        // 指纹碰撞或存储损坏时会静默返回错误内容（trust-the-hash）
        if self.blob_store.exists(&descriptor_path).await? {
            tracing::info!(fingerprint = %fp, "Found existing summary");
            let json = self.blob_store.read_text(&descriptor_path).await?;
            return Ok(SummaryOutcome {
                json,
                cache_hit: true,
            });
        }

        tracing::info!(url = %cmd.url, voice = %cmd.voice, fingerprint = %fp, "Generating script");
        let script = self.summary_provider.summarize(&cmd.url).await?;
        tracing::info!(script_len = script.len(), "Script generated");

        let audio = self.speech.synthesize(&script, &cmd.voice).await?;
        tracing::info!(
            audio_size = audio.data.len(),
            content_type = %audio.content_type,
            "Speech synthesized"
        );

        self.blob_store
            .write(&audio_path, &audio.data, &audio.content_type)
            .await?;

        let descriptor = Descriptor::new(
            cmd.url,
            cmd.voice,
            script,
            self.blob_store.public_url(&audio_path),
        );

        let json = serde_json::to_string(&descriptor)
            .map_err(|e| ApplicationError::internal(e.to_string()))?;

        self.blob_store
            .write_text(&descriptor_path, &json, "application/json")
            .await?;

        tracing::info!(fingerprint = %fp, "Summary cached");

        Ok(SummaryOutcome {
            json,
            cache_hit: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{
        FakeSpeechClient, FakeSummaryClient, MemoryBlobStore,
    };

    fn handler_with(
        summary: Arc<FakeSummaryClient>,
        speech: Arc<FakeSpeechClient>,
        store: Arc<MemoryBlobStore>,
    ) -> GenerateSummaryHandler {
        GenerateSummaryHandler::new(summary, speech, store, "artichoke")
    }

    fn command(url: &str, voice: &str) -> GenerateSummaryCommand {
        GenerateSummaryCommand {
            url: url.to_string(),
            voice: voice.to_string(),
        }
    }

    #[tokio::test]
    async fn test_miss_generates_and_persists_both_objects() {
        let summary = Arc::new(FakeSummaryClient::new("Ever wondered about crabs?"));
        let speech = Arc::new(FakeSpeechClient::new(vec![1, 2, 3], "audio/mpeg"));
        let store = Arc::new(MemoryBlobStore::new());
        let handler = handler_with(summary.clone(), speech.clone(), store.clone());

        let outcome = handler
            .handle(command("https://example.com/post", "nova"))
            .await
            .unwrap();

        assert!(!outcome.cache_hit);
        assert_eq!(summary.call_count(), 1);
        assert_eq!(speech.call_count(), 1);
        assert_eq!(store.object_count(), 2);

        let fp = fingerprint("https://example.com/post", "nova");
        let descriptor: Descriptor = serde_json::from_str(&outcome.json).unwrap();
        assert_eq!(descriptor.url, "https://example.com/post");
        assert_eq!(descriptor.voice, "nova");
        assert_eq!(descriptor.script, "Ever wondered about crabs?");
        assert_eq!(
            descriptor.mp3,
            format!("memory://artichoke/summary/{}.mp3", fp)
        );

        // 音频以声明的 Content-Type 落盘
        let (data, content_type) = store
            .get(&format!("artichoke/summary/{}.mp3", fp))
            .unwrap();
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(content_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_hit_returns_identical_json_without_provider_calls() {
        let summary = Arc::new(FakeSummaryClient::new("a script"));
        let speech = Arc::new(FakeSpeechClient::new(vec![0u8; 8], "audio/mpeg"));
        let store = Arc::new(MemoryBlobStore::new());
        let handler = handler_with(summary.clone(), speech.clone(), store.clone());

        let first = handler
            .handle(command("https://example.com/a", "nova"))
            .await
            .unwrap();
        let second = handler
            .handle(command("https://example.com/a", "nova"))
            .await
            .unwrap();

        assert!(second.cache_hit);
        assert_eq!(first.json, second.json);
        // 第二次调用不触碰任何 provider
        assert_eq!(summary.call_count(), 1);
        assert_eq!(speech.call_count(), 1);
    }

    #[tokio::test]
    async fn test_different_voice_is_independent_cache_entry() {
        let summary = Arc::new(FakeSummaryClient::new("a script"));
        let speech = Arc::new(FakeSpeechClient::new(vec![0u8; 8], "audio/mpeg"));
        let store = Arc::new(MemoryBlobStore::new());
        let handler = handler_with(summary.clone(), speech.clone(), store.clone());

        handler
            .handle(command("https://example.com/a", "nova"))
            .await
            .unwrap();
        let outcome = handler
            .handle(command("https://example.com/a", "onyx"))
            .await
            .unwrap();

        assert!(!outcome.cache_hit);
        assert_eq!(summary.call_count(), 2);
        assert_eq!(speech.call_count(), 2);
        assert_eq!(store.object_count(), 4);
    }

    #[tokio::test]
    async fn test_summary_failure_skips_synthesis_and_writes() {
        let summary = Arc::new(FakeSummaryClient::failing());
        let speech = Arc::new(FakeSpeechClient::new(vec![0u8; 8], "audio/mpeg"));
        let store = Arc::new(MemoryBlobStore::new());
        let handler = handler_with(summary, speech.clone(), store.clone());

        let result = handler.handle(command("https://example.com/a", "nova")).await;

        assert!(matches!(
            result,
            Err(ApplicationError::ExternalServiceError(_))
        ));
        assert_eq!(speech.call_count(), 0);
        assert_eq!(store.object_count(), 0);
    }

    #[tokio::test]
    async fn test_synthesis_failure_leaves_cache_miss() {
        let summary = Arc::new(FakeSummaryClient::new("a script"));
        let speech = Arc::new(FakeSpeechClient::failing());
        let store = Arc::new(MemoryBlobStore::new());
        let handler = handler_with(summary.clone(), speech, store.clone());

        let result = handler.handle(command("https://example.com/a", "nova")).await;

        assert!(result.is_err());
        // 描述符未写入，重试时仍然 miss
        assert_eq!(store.object_count(), 0);
        let fp = fingerprint("https://example.com/a", "nova");
        assert!(!store
            .exists(&descriptor_path("artichoke", &fp))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_empty_url_is_validation_error() {
        let summary = Arc::new(FakeSummaryClient::new("a script"));
        let speech = Arc::new(FakeSpeechClient::new(vec![], "audio/mpeg"));
        let store = Arc::new(MemoryBlobStore::new());
        let handler = handler_with(summary.clone(), speech, store);

        let result = handler.handle(command("", "nova")).await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert_eq!(summary.call_count(), 0);
    }
}

//! Blob Store Port - 持久化存储抽象
//!
//! 定义描述符 JSON 与音频文件的存储接口，无事务保证。
//! 同一路径的并发写入为 last-write-wins

use async_trait::async_trait;
use thiserror::Error;

/// Blob 存储错误
#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Blob Store Port
///
/// 描述符和音频一经写入即不再修改，没有删除路径
#[async_trait]
pub trait BlobStorePort: Send + Sync {
    /// 检查对象是否存在
    async fn exists(&self, path: &str) -> Result<bool, BlobStoreError>;

    /// 读取文本对象
    async fn read_text(&self, path: &str) -> Result<String, BlobStoreError>;

    /// 写入二进制对象
    async fn write(
        &self,
        path: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<(), BlobStoreError>;

    /// 写入文本对象
    async fn write_text(
        &self,
        path: &str,
        text: &str,
        content_type: &str,
    ) -> Result<(), BlobStoreError>;

    /// 获取对象的公开访问地址
    fn public_url(&self, path: &str) -> String;
}

/// 生成缓存指纹
///
/// 使用 md5(url + voice) 作为缓存 key 与存储路径片段。
/// 哈希碰撞不做处理：两个不同的 (url, voice) 碰撞时会
/// 静默返回错误的缓存内容，按哈希强度接受该风险
pub fn fingerprint(url: &str, voice: &str) -> String {
    let digest = md5::compute(format!("{}{}", url, voice).as_bytes());
    format!("{:x}", digest)
}

/// 描述符 JSON 的存储路径
pub fn descriptor_path(prefix: &str, fingerprint: &str) -> String {
    format!("{}/summary/{}.json", prefix, fingerprint)
}

/// 音频文件的存储路径
pub fn audio_path(prefix: &str, fingerprint: &str) -> String {
    format!("{}/summary/{}.mp3", prefix, fingerprint)
}

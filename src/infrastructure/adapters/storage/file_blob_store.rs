//! File Blob Store - 文件系统 Blob 存储实现
//!
//! 实现 BlobStorePort trait。对象以相对路径存放在根目录下，
//! 公开地址由 public base URL + /files 挂载点拼接而成

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{BlobStoreError, BlobStorePort};

/// 文件系统 Blob 存储
pub struct FileBlobStore {
    /// 存储根目录
    base_dir: PathBuf,
    /// 公开访问的 Base URL
    public_base_url: String,
}

impl FileBlobStore {
    /// 创建新的文件存储
    pub async fn new(
        base_dir: impl AsRef<Path>,
        public_base_url: impl Into<String>,
    ) -> Result<Self, BlobStoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| BlobStoreError::IoError(e.to_string()))?;

        let public_base_url = public_base_url.into().trim_end_matches('/').to_string();

        tracing::info!(
            base_dir = %base_dir.display(),
            public_base_url = %public_base_url,
            "FileBlobStore initialized"
        );

        Ok(Self {
            base_dir,
            public_base_url,
        })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 对象路径到文件路径的映射
    fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }
}

#[async_trait]
impl BlobStorePort for FileBlobStore {
    async fn exists(&self, path: &str) -> Result<bool, BlobStoreError> {
        Ok(self.resolve(path).exists())
    }

    async fn read_text(&self, path: &str) -> Result<String, BlobStoreError> {
        let file_path = self.resolve(path);

        if !file_path.exists() {
            return Err(BlobStoreError::NotFound(path.to_string()));
        }

        fs::read_to_string(&file_path)
            .await
            .map_err(|e| BlobStoreError::IoError(e.to_string()))
    }

    async fn write(
        &self,
        path: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<(), BlobStoreError> {
        let file_path = self.resolve(path);

        // 确保父目录存在
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| BlobStoreError::IoError(e.to_string()))?;
        }

        fs::write(&file_path, data)
            .await
            .map_err(|e| BlobStoreError::IoError(e.to_string()))?;

        // 文件系统不保存 Content-Type，访问时由扩展名推断
        tracing::debug!(
            path = %path,
            size = data.len(),
            content_type = %content_type,
            "Blob written"
        );

        Ok(())
    }

    async fn write_text(
        &self,
        path: &str,
        text: &str,
        content_type: &str,
    ) -> Result<(), BlobStoreError> {
        self.write(path, text.as_bytes(), content_type).await
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/files/{}", self.public_base_url, path)
    }
}

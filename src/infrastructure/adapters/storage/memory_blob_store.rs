//! Memory Blob Store - 用于测试的内存 Blob 存储

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::application::ports::{BlobStoreError, BlobStorePort};

/// 内存 Blob 存储
///
/// 对象保存在进程内 HashMap 中，公开地址使用 memory:// 伪协议
#[derive(Default)]
pub struct MemoryBlobStore {
    /// path -> (data, content_type)
    objects: RwLock<HashMap<String, (Vec<u8>, String)>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已存储的对象数量
    pub fn object_count(&self) -> usize {
        self.objects.read().unwrap().len()
    }

    /// 读取对象内容与 Content-Type
    pub fn get(&self, path: &str) -> Option<(Vec<u8>, String)> {
        self.objects.read().unwrap().get(path).cloned()
    }
}

#[async_trait]
impl BlobStorePort for MemoryBlobStore {
    async fn exists(&self, path: &str) -> Result<bool, BlobStoreError> {
        Ok(self.objects.read().unwrap().contains_key(path))
    }

    async fn read_text(&self, path: &str) -> Result<String, BlobStoreError> {
        let objects = self.objects.read().unwrap();
        let (data, _) = objects
            .get(path)
            .ok_or_else(|| BlobStoreError::NotFound(path.to_string()))?;
        String::from_utf8(data.clone()).map_err(|e| BlobStoreError::IoError(e.to_string()))
    }

    async fn write(
        &self,
        path: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<(), BlobStoreError> {
        self.objects
            .write()
            .unwrap()
            .insert(path.to_string(), (data.to_vec(), content_type.to_string()));
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
        format!("memory://{}", path)
    }
}

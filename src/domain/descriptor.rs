//! Descriptor - 摘要描述符值对象
//!
//! 一次生成后持久化的摘要记录，包含且仅包含四个字段。
//! 描述符一旦写入即不可变，本系统不会更新或删除它。

use serde::{Deserialize, Serialize};

/// 摘要描述符
///
/// 持久化为 `{prefix}/summary/{fingerprint}.json`，同时作为 API 响应体返回
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// 源页面 URL
    pub url: String,
    /// 合成语音使用的音色名
    pub voice: String,
    /// 摘要文稿
    pub script: String,
    /// 音频文件的公开访问地址
    pub mp3: String,
}

impl Descriptor {
    pub fn new(
        url: impl Into<String>,
        voice: impl Into<String>,
        script: impl Into<String>,
        mp3: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            voice: voice.into(),
            script: script.into(),
            mp3: mp3.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_exactly_four_fields() {
        let descriptor = Descriptor::new(
            "https://example.com/post",
            "nova",
            "Ever wondered...",
            "http://localhost:5060/files/artichoke/summary/abc.mp3",
        );

        let value = serde_json::to_value(&descriptor).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(object.contains_key("url"));
        assert!(object.contains_key("voice"));
        assert!(object.contains_key("script"));
        assert!(object.contains_key("mp3"));
    }

    #[test]
    fn test_deserializes_stored_json() {
        let json = r#"{"url":"https://example.com","voice":"nova","script":"hi","mp3":"http://x/y.mp3"}"#;
        let descriptor: Descriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.voice, "nova");
        assert_eq!(descriptor.mp3, "http://x/y.mp3");
    }
}

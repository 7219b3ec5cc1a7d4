//! Data Transfer Objects

use serde::Deserialize;

/// 摘要请求
///
/// voice 缺省为 "nova"；除必填字段存在性外不做其他校验，
/// 音色名不被 TTS 服务识别时由上游报错
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// 源页面 URL
    pub url: String,

    /// 合成语音使用的音色名
    #[serde(default = "default_voice")]
    pub voice: String,
}

fn default_voice() -> String {
    "nova".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_defaults_to_nova() {
        let request: SummaryRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(request.voice, "nova");
    }

    #[test]
    fn test_explicit_voice_is_kept() {
        let request: SummaryRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "voice": "onyx"}"#).unwrap();
        assert_eq!(request.voice, "onyx");
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let result = serde_json::from_str::<SummaryRequest>(r#"{"voice": "nova"}"#);
        assert!(result.is_err());
    }
}

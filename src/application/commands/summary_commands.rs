//! Summary Commands - 摘要生成命令定义

/// 生成摘要命令
#[derive(Debug, Clone)]
pub struct GenerateSummaryCommand {
    /// 源页面 URL
    pub url: String,
    /// 合成语音使用的音色名
    pub voice: String,
}

/// 生成摘要结果
///
/// 缓存命中时 `json` 为存储中的原始字节串，不经过反序列化，
/// 保证与首次生成的响应逐字节一致
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    /// 描述符 JSON 文本
    pub json: String,
    /// 是否命中缓存
    pub cache_hit: bool,
}

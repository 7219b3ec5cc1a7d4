//! Application State

use std::sync::Arc;

use crate::application::{
    BlobStorePort, GenerateSummaryHandler, SpeechSynthesisPort, SummaryProviderPort,
};

/// 应用状态
///
/// 所有客户端与存储在启动时构造一次，整个进程生命周期内复用；
/// 不持有任何请求级可变状态
pub struct AppState {
    pub summary_handler: GenerateSummaryHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        summary_provider: Arc<dyn SummaryProviderPort>,
        speech: Arc<dyn SpeechSynthesisPort>,
        blob_store: Arc<dyn BlobStorePort>,
        storage_prefix: impl Into<String>,
    ) -> Self {
        Self {
            summary_handler: GenerateSummaryHandler::new(
                summary_provider,
                speech,
                blob_store,
                storage_prefix,
            ),
        }
    }
}

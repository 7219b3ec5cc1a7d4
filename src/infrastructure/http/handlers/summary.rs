//! Summary Handler
//!
//! 摘要生成端点。响应体是描述符 JSON 本身，
//! 缓存命中时原样返回存储内容，与首次响应逐字节一致

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::GenerateSummaryCommand;
use crate::infrastructure::http::dto::SummaryRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummaryRequest>,
) -> Result<Response, ApiError> {
    let cmd = GenerateSummaryCommand {
        url: req.url,
        voice: req.voice,
    };

    let outcome = state.summary_handler.handle(cmd).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        outcome.json,
    )
        .into_response())
}

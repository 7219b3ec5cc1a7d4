//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping     GET   健康检查
//! - /api/summary  POST  生成（或命中缓存返回）摘要描述符
//! - /files/*      GET   Blob 存储目录的静态文件服务（由 server 挂载）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/summary", post(handlers::generate_summary))
}

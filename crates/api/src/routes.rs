use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::{dispatch::dispatch_input, health::health_check, root::service_info};
use fanout_dispatcher::DispatchCoordinator;

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<DispatchCoordinator>,
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 分发端点：原前端向根路径POST {"input": ...}
        .route("/", get(service_info).post(dispatch_input))
        .with_state(state)
}

use axum::{extract::State, Json};
use serde::Serialize;

use crate::routes::AppState;
use fanout_dispatcher::response_label;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub status: String,
    pub workers: Vec<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// 根路径GET处理器 - 返回服务信息和已配置的Worker标签
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    let workers = state
        .coordinator
        .specs()
        .iter()
        .map(|spec| response_label(&spec.name))
        .collect();

    Json(ServiceInfo {
        name: "fanout".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "多语言进程分发聚合服务".to_string(),
        status: "running".to_string(),
        workers,
        timestamp: chrono::Utc::now(),
    })
}

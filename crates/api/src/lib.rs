//! # Fanout API
//!
//! 多语言进程分发聚合服务的HTTP接口层，基于Axum框架构建。
//!
//! ## API 端点
//!
//! - `POST /` - 提交输入文本，分发到所有配置的Worker并返回聚合结果
//! - `GET /` - 服务信息
//! - `GET /health` - 健康检查
//!
//! ## 调用示例
//!
//! ```bash
//! curl -X POST http://localhost:8000/ \
//!   -H "Content-Type: application/json" \
//!   -d '{"input": "hello"}'
//! ```
//!
//! 成功响应是一个单层JSON对象，每个配置的Worker恰好一个键：
//!
//! ```json
//! {
//!   "C# Output": "C# received: hello and responds with a greeting!",
//!   "Java Output": "Java received: hello and responds with a hello!",
//!   "Python Output": "[worker unavailable]"
//! }
//! ```
//!
//! 个别Worker失败只影响它自己的键，整个请求仍然返回200。

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use fanout_config::ApiConfig;
use fanout_dispatcher::DispatchCoordinator;
use tower::ServiceBuilder;

use middleware::{cors_layer, request_logging, trace_layer};
use routes::{create_routes, AppState};

/// 创建完整的API应用
pub fn create_app(coordinator: Arc<DispatchCoordinator>, api_config: &ApiConfig) -> Router {
    let state = AppState { coordinator };

    create_routes(state).layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(cors_layer(api_config))
            .layer(axum::middleware::from_fn(request_logging)),
    )
}

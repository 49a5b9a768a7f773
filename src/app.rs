use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use fanout_api::create_app;
use fanout_config::AppConfig;
use fanout_core::WorkerRunner;
use fanout_dispatcher::DispatchCoordinator;
use fanout_worker::ProcessWorkerRunner;
use tokio::{net::TcpListener, sync::broadcast};
use tracing::info;

/// 主应用程序
///
/// 启动时从配置构建一次只读的Worker列表和分发协调器，
/// 之后所有请求共享同一个协调器实例。
pub struct Application {
    config: AppConfig,
    coordinator: Arc<DispatchCoordinator>,
}

impl Application {
    /// 创建新的应用实例；Worker列表为空在这里就失败，不会开始监听
    pub fn new(config: AppConfig) -> Result<Self> {
        let specs = config.worker_specs();
        let names: Vec<&str> = specs.iter().map(|spec| spec.name.as_str()).collect();
        info!("已配置{}个Worker: {:?}", specs.len(), names);

        let runner: Arc<dyn WorkerRunner> = Arc::new(ProcessWorkerRunner::new());
        let coordinator =
            DispatchCoordinator::new(runner, specs, config.dispatch.request_timeout())
                .context("创建分发协调器失败")?;

        Ok(Self {
            config,
            coordinator: Arc::new(coordinator),
        })
    }

    /// 构建API路由，测试中也直接使用
    pub fn router(&self) -> Router {
        create_app(Arc::clone(&self.coordinator), &self.config.api)
    }

    /// 运行应用程序，直到收到关闭信号
    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let app = self.router();

        let listener = TcpListener::bind(&self.config.api.bind_address)
            .await
            .with_context(|| format!("绑定地址失败: {}", self.config.api.bind_address))?;

        info!("API服务器启动在 http://{}", self.config.api.bind_address);

        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("API服务器收到关闭信号");
            })
            .await
            .context("API服务器运行失败")?;

        info!("API服务器已停止");
        Ok(())
    }
}

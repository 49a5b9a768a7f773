use std::sync::Arc;
use std::time::{Duration, Instant};

use fanout_core::{FanoutError, FanoutResult, InvocationResult, WorkerRunner, WorkerSpec};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// 分发协调器
///
/// 持有进程生命周期内只读的Worker列表，对每个请求并发调用全部Worker，
/// 并按配置顺序无条件join：无论各Worker成败，每个请求产出的结果数
/// 恒等于配置的Worker数。不做重试。
pub struct DispatchCoordinator {
    runner: Arc<dyn WorkerRunner>,
    specs: Arc<Vec<WorkerSpec>>,
    request_timeout: Duration,
}

impl DispatchCoordinator {
    /// 创建协调器；Worker列表为空属于配置错误，启动期即失败
    pub fn new(
        runner: Arc<dyn WorkerRunner>,
        specs: Vec<WorkerSpec>,
        request_timeout: Duration,
    ) -> FanoutResult<Self> {
        if specs.is_empty() {
            return Err(FanoutError::config_error("未配置任何Worker，无法分发请求"));
        }
        Ok(Self {
            runner,
            specs: Arc::new(specs),
            request_timeout,
        })
    }

    pub fn specs(&self) -> &[WorkerSpec] {
        &self.specs
    }

    /// 并发分发一次输入到所有Worker
    ///
    /// 每个Worker在独立任务中调用，慢的Worker不阻塞快的。请求级超时
    /// 到期后，未完成的Worker被取消并合成Timeout结果，立即返回。
    /// 调用方中途放弃（客户端断开）时，drop守卫触发取消信号，
    /// 所有在途子进程被及时终止。
    pub async fn dispatch(&self, input: &str) -> Vec<InvocationResult> {
        let start_time = Instant::now();
        let deadline = tokio::time::Instant::now() + self.request_timeout;
        let cancel = CancellationToken::new();
        let _guard = cancel.clone().drop_guard();

        info!("分发请求到{}个Worker", self.specs.len());

        let handles: Vec<_> = self
            .specs
            .iter()
            .map(|spec| {
                let runner = Arc::clone(&self.runner);
                let spec = spec.clone();
                let input = input.to_string();
                let token = cancel.child_token();
                tokio::spawn(async move { runner.invoke(&spec, &input, token).await })
            })
            .collect();

        // 按配置顺序join，结果顺序与完成顺序无关
        let mut results = Vec::with_capacity(handles.len());
        for (handle, spec) in handles.into_iter().zip(self.specs.iter()) {
            match tokio::time::timeout_at(deadline, handle).await {
                Ok(Ok(result)) => results.push(result),
                Ok(Err(e)) => {
                    warn!("Worker任务异常终止: worker={}, error={}", spec.name, e);
                    results.push(InvocationResult::failure(
                        &spec.name,
                        format!("Worker任务异常终止: {e}"),
                        None,
                        start_time.elapsed(),
                    ));
                }
                Err(_) => {
                    warn!(
                        "请求级超时，合成Timeout结果: worker={}, timeout={}ms",
                        spec.name,
                        self.request_timeout.as_millis()
                    );
                    cancel.cancel();
                    results.push(InvocationResult::timeout(&spec.name, self.request_timeout));
                }
            }
        }

        info!(
            "分发完成: workers={}, duration={}ms",
            results.len(),
            start_time.elapsed().as_millis()
        );

        results
    }
}

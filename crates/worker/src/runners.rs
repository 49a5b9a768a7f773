use std::collections::HashMap;
use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use fanout_core::{InvocationResult, WorkerRunner, WorkerSpec};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// 进程Worker调用器
///
/// 每次调用派生一个独立的OS进程：输入文本作为最后一个位置参数传入，
/// 标准输出/标准错误被完整捕获，超时或取消时进程被杀死并回收。
/// 调用之间不共享任何可变状态。
pub struct ProcessWorkerRunner;

impl ProcessWorkerRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessWorkerRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// 等待子进程的三种收场
enum Waited {
    Done(std::io::Result<std::process::ExitStatus>),
    TimedOut,
    Cancelled,
}

#[async_trait]
impl WorkerRunner for ProcessWorkerRunner {
    async fn invoke(
        &self,
        spec: &WorkerSpec,
        input: &str,
        cancel: CancellationToken,
    ) -> InvocationResult {
        let start_time = Instant::now();

        info!(
            "调用Worker进程: worker={}, command={}, args={:?}",
            spec.name, spec.command, spec.args
        );

        let mut cmd = Command::new(&spec.command);
        cmd.args(&spec.args);
        cmd.arg(input);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        // 兜底：即使调用方整体被丢弃，子进程也随之被杀死
        cmd.kill_on_drop(true);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                error!("启动Worker进程失败: worker={}, error={}", spec.name, e);
                return InvocationResult::launch_failure(&spec.name, e.to_string());
            }
        };

        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                return InvocationResult::failure(
                    &spec.name,
                    "无法获取stdout".to_string(),
                    None,
                    start_time.elapsed(),
                );
            }
        };
        let stderr = match child.stderr.take() {
            Some(stderr) => stderr,
            None => {
                return InvocationResult::failure(
                    &spec.name,
                    "无法获取stderr".to_string(),
                    None,
                    start_time.elapsed(),
                );
            }
        };

        let mut stdout_reader = BufReader::new(stdout);
        let mut stderr_reader = BufReader::new(stderr);
        let mut stdout_lines: Vec<String> = Vec::new();
        let mut stderr_lines: Vec<String> = Vec::new();

        // 先读完两个管道再等退出，管道写满不会卡死子进程
        let waited = {
            let drive = async {
                let stdout_task = async {
                    let mut line = String::new();
                    while stdout_reader.read_line(&mut line).await.unwrap_or(0) > 0 {
                        stdout_lines.push(line.trim_end().to_string());
                        line.clear();
                    }
                };
                let stderr_task = async {
                    let mut line = String::new();
                    while stderr_reader.read_line(&mut line).await.unwrap_or(0) > 0 {
                        stderr_lines.push(line.trim_end().to_string());
                        line.clear();
                    }
                };
                tokio::join!(stdout_task, stderr_task);

                child.wait().await
            };

            tokio::select! {
                result = tokio::time::timeout(spec.timeout, drive) => match result {
                    Ok(wait_result) => Waited::Done(wait_result),
                    Err(_) => Waited::TimedOut,
                },
                _ = cancel.cancelled() => Waited::Cancelled,
            }
        };

        match waited {
            Waited::Done(Ok(exit_status)) => {
                let elapsed = start_time.elapsed();
                let exit_code = exit_status.code();

                if exit_status.success() {
                    info!(
                        "Worker进程执行完成: worker={}, duration={}ms",
                        spec.name,
                        elapsed.as_millis()
                    );
                    InvocationResult::success(&spec.name, stdout_lines.join("\n"), elapsed)
                } else {
                    let detail = if stderr_lines.is_empty() {
                        format!("Worker进程非零退出，退出码: {exit_code:?}")
                    } else {
                        format!(
                            "Worker进程非零退出，退出码: {exit_code:?}, stderr: {}",
                            stderr_lines.join("\n")
                        )
                    };
                    warn!(
                        "Worker进程执行失败: worker={}, exit_code={:?}",
                        spec.name, exit_code
                    );
                    InvocationResult::failure(&spec.name, detail, exit_code, elapsed)
                }
            }
            Waited::Done(Err(e)) => {
                error!("等待Worker进程结束失败: worker={}, error={}", spec.name, e);
                InvocationResult::failure(
                    &spec.name,
                    format!("等待进程结束失败: {e}"),
                    None,
                    start_time.elapsed(),
                )
            }
            Waited::TimedOut => {
                warn!(
                    "Worker进程超时，强制终止: worker={}, timeout={}ms",
                    spec.name,
                    spec.timeout.as_millis()
                );
                let _ = child.start_kill();
                let _ = child.wait().await;
                InvocationResult::timeout(&spec.name, spec.timeout)
            }
            Waited::Cancelled => {
                warn!("请求已取消，终止Worker进程: worker={}", spec.name);
                let _ = child.start_kill();
                let _ = child.wait().await;
                InvocationResult::failure(
                    &spec.name,
                    "请求已取消，Worker进程被终止".to_string(),
                    None,
                    start_time.elapsed(),
                )
            }
        }
    }

    fn name(&self) -> &str {
        "process"
    }
}

/// 单个Worker的模拟行为
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// 延迟后成功返回固定输出
    Succeed { output: String, delay: Duration },
    /// 延迟后失败
    Fail { detail: String, delay: Duration },
    /// 一直不返回，直到请求级超时或取消
    Hang,
}

/// 模拟Worker调用器，用于测试
pub struct MockWorkerRunner {
    behaviors: HashMap<String, MockBehavior>,
}

impl MockWorkerRunner {
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
        }
    }

    pub fn with_behavior(mut self, worker: impl Into<String>, behavior: MockBehavior) -> Self {
        self.behaviors.insert(worker.into(), behavior);
        self
    }
}

impl Default for MockWorkerRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkerRunner for MockWorkerRunner {
    async fn invoke(
        &self,
        spec: &WorkerSpec,
        _input: &str,
        cancel: CancellationToken,
    ) -> InvocationResult {
        let start_time = Instant::now();

        let behavior = self
            .behaviors
            .get(&spec.name)
            .cloned()
            .unwrap_or(MockBehavior::Succeed {
                output: format!("mock output from {}", spec.name),
                delay: Duration::ZERO,
            });

        match behavior {
            MockBehavior::Succeed { output, delay } => {
                sleep(delay).await;
                InvocationResult::success(&spec.name, output, start_time.elapsed())
            }
            MockBehavior::Fail { detail, delay } => {
                sleep(delay).await;
                InvocationResult::failure(&spec.name, detail, Some(1), start_time.elapsed())
            }
            MockBehavior::Hang => {
                cancel.cancelled().await;
                InvocationResult::failure(
                    &spec.name,
                    "请求已取消，Worker进程被终止".to_string(),
                    None,
                    start_time.elapsed(),
                )
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

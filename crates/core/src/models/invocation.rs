use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 单次Worker调用的结局分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationOutcome {
    /// 进程正常退出（退出码0）
    Success,
    /// 启动失败或非零退出
    Failure,
    /// 超过单次调用或请求级超时
    Timeout,
}

/// 一次Worker调用的结果
///
/// 由Worker适配器创建，属于恰好一个Worker和一个请求，创建后不再修改。
/// 不变式：`output`当且仅当Success时存在，`error_detail`当且仅当
/// Failure/Timeout时存在。通过构造函数保证，不要手工拼字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    /// Worker标识
    pub worker: String,
    /// 结局分类
    pub outcome: InvocationOutcome,
    /// 捕获的标准输出（仅Success）
    pub output: Option<String>,
    /// 失败详情（仅Failure/Timeout），只用于服务端日志
    pub error_detail: Option<String>,
    /// 进程退出码（启动失败或超时被杀时为None）
    pub exit_code: Option<i32>,
    /// 调用耗时（毫秒）
    pub execution_time_ms: u64,
}

impl InvocationResult {
    pub fn success(worker: impl Into<String>, output: String, elapsed: Duration) -> Self {
        Self {
            worker: worker.into(),
            outcome: InvocationOutcome::Success,
            output: Some(output),
            error_detail: None,
            exit_code: Some(0),
            execution_time_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn failure(
        worker: impl Into<String>,
        detail: String,
        exit_code: Option<i32>,
        elapsed: Duration,
    ) -> Self {
        Self {
            worker: worker.into(),
            outcome: InvocationOutcome::Failure,
            output: None,
            error_detail: Some(detail),
            exit_code,
            execution_time_ms: elapsed.as_millis() as u64,
        }
    }

    /// 启动阶段失败（可执行文件缺失、权限不足等），与运行期失败区分
    pub fn launch_failure(worker: impl Into<String>, detail: String) -> Self {
        Self {
            worker: worker.into(),
            outcome: InvocationOutcome::Failure,
            output: None,
            error_detail: Some(format!("Worker进程启动失败: {detail}")),
            exit_code: None,
            execution_time_ms: 0,
        }
    }

    pub fn timeout(worker: impl Into<String>, limit: Duration) -> Self {
        Self {
            worker: worker.into(),
            outcome: InvocationOutcome::Timeout,
            output: None,
            error_detail: Some(format!("Worker调用超过{}ms未完成", limit.as_millis())),
            exit_code: None,
            execution_time_ms: limit.as_millis() as u64,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == InvocationOutcome::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_holds_output_only() {
        let result =
            InvocationResult::success("C#", "hello".to_string(), Duration::from_millis(12));
        assert!(result.is_success());
        assert_eq!(result.output.as_deref(), Some("hello"));
        assert!(result.error_detail.is_none());
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn test_failure_holds_detail_only() {
        let result = InvocationResult::failure(
            "Java",
            "exit code 1".to_string(),
            Some(1),
            Duration::from_millis(5),
        );
        assert!(!result.is_success());
        assert!(result.output.is_none());
        assert_eq!(result.error_detail.as_deref(), Some("exit code 1"));
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn test_launch_failure_is_distinct_from_runtime_failure() {
        let result = InvocationResult::launch_failure("Python", "No such file".to_string());
        assert_eq!(result.outcome, InvocationOutcome::Failure);
        assert!(result.error_detail.unwrap().contains("启动失败"));
        assert_eq!(result.exit_code, None);
    }

    #[test]
    fn test_timeout_records_limit() {
        let result = InvocationResult::timeout("Java", Duration::from_secs(3));
        assert_eq!(result.outcome, InvocationOutcome::Timeout);
        assert!(result.error_detail.unwrap().contains("3000ms"));
        assert!(result.output.is_none());
    }
}

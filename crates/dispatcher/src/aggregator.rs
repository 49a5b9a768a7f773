use fanout_core::{AggregateResponse, InvocationOutcome, InvocationResult, ERROR_PLACEHOLDER};
use tracing::warn;

/// 由Worker标识派生调用方可见的标签，对相同标识永远产出相同标签
pub fn response_label(worker_name: &str) -> String {
    format!("{worker_name} Output")
}

/// 把一个请求的全部调用结果映射为聚合响应
///
/// 成功的Worker映射为其输出文本；失败或超时的Worker映射为固定的
/// 占位文本，具体原因只记入日志，绝不回传给调用方。部分失败不是
/// 错误：无论结果组合如何，响应都覆盖每个Worker恰好一次。
pub fn aggregate(results: &[InvocationResult]) -> AggregateResponse {
    let entries = results
        .iter()
        .map(|result| {
            let label = response_label(&result.worker);
            match result.outcome {
                InvocationOutcome::Success => {
                    (label, result.output.clone().unwrap_or_default())
                }
                InvocationOutcome::Failure | InvocationOutcome::Timeout => {
                    warn!(
                        "Worker结果不可用，响应中使用占位文本: worker={}, outcome={:?}, detail={}",
                        result.worker,
                        result.outcome,
                        result.error_detail.as_deref().unwrap_or("")
                    );
                    (label, ERROR_PLACEHOLDER.to_string())
                }
            }
        })
        .collect();

    AggregateResponse::new(entries)
}

pub mod errors;
pub mod models;
pub mod traits;

pub use errors::{FanoutError, FanoutResult};
pub use models::{AggregateResponse, InvocationOutcome, InvocationResult, WorkerSpec};
pub use traits::WorkerRunner;

/// 聚合响应中替代失败Worker输出的占位文本
///
/// 调用方只会看到这个固定文本，具体失败原因只写入服务端日志。
pub const ERROR_PLACEHOLDER: &str = "[worker unavailable]";

//! Worker调用接口定义
//!
//! 每个外部Worker都是黑盒：接收一个文本输入，成功时在标准输出上产出
//! 一个文本回复，失败时非零退出并可在标准错误上输出诊断信息。
//! 此接口是系统对这种能力的唯一抽象。

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::models::{InvocationResult, WorkerSpec};

/// Worker调用器接口
///
/// 实现者负责一次完整的调用生命周期：启动、捕获输出、限时、终止。
/// 调用永不返回`Err`——启动失败、非零退出、超时都折叠进
/// `InvocationResult`，由聚合层统一处理；并发调用之间不共享可变状态。
///
/// # 实现要求
///
/// - 尊重`spec.timeout`，超时后必须终止并回收子进程
/// - 观察到`cancel`取消信号后必须立即终止子进程，不留孤儿进程
/// - 除派生一个OS进程外不产生其他可观察副作用
#[async_trait]
pub trait WorkerRunner: Send + Sync {
    /// 调用一个Worker，输入原样透传为最后一个位置参数
    async fn invoke(
        &self,
        spec: &WorkerSpec,
        input: &str,
        cancel: CancellationToken,
    ) -> InvocationResult;

    /// 调用器名称，用于日志
    fn name(&self) -> &str;
}

use std::time::Duration;

/// 单个外部Worker的静态配置
///
/// 进程启动时从配置构建一次，之后在所有请求间只读共享。
/// `name`在配置中必须唯一，输入文本作为最后一个位置参数追加到`args`之后。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSpec {
    /// Worker标识，如 "C#"、"Java"、"Python"
    pub name: String,
    /// 可执行文件路径或命令名
    pub command: String,
    /// 固定参数，输入文本不在其中
    pub args: Vec<String>,
    /// 单次调用超时
    pub timeout: Duration,
}

impl WorkerSpec {
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        args: Vec<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            args,
            timeout,
        }
    }
}

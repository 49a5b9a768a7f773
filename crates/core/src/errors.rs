use thiserror::Error;

/// fanout统一错误类型
#[derive(Debug, Error)]
pub enum FanoutError {
    #[error("配置错误: {0}")]
    Configuration(String),
    #[error("请求参数错误: {0}")]
    InvalidRequest(String),
    #[error("Worker调用错误: {0}")]
    Execution(String),
    #[error("操作超时: {0}")]
    Timeout(String),
    #[error("请求已取消")]
    Cancelled,
    #[error("序列化错误: {0}")]
    Serialization(String),
    #[error("内部错误: {0}")]
    Internal(String),
}

pub type FanoutResult<T> = Result<T, FanoutError>;

impl FanoutError {
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
    /// 配置类错误在启动期是致命的，不能按请求恢复
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FanoutError::Configuration(_) | FanoutError::Internal(_)
        )
    }
    /// 面向调用方的提示文案，绝不携带内部细节
    pub fn user_message(&self) -> &str {
        match self {
            FanoutError::InvalidRequest(_) => "请求参数有误，请检查请求体格式",
            FanoutError::Timeout(_) => "操作超时，请稍后重试",
            FanoutError::Cancelled => "请求已取消",
            _ => "系统繁忙，请稍后重试",
        }
    }
}

impl From<serde_json::Error> for FanoutError {
    fn from(err: serde_json::Error) -> Self {
        FanoutError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for FanoutError {
    fn from(err: anyhow::Error) -> Self {
        FanoutError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(FanoutError::Configuration("no workers".to_string()).is_fatal());
        assert!(FanoutError::Internal("boom".to_string()).is_fatal());
        assert!(!FanoutError::InvalidRequest("missing input".to_string()).is_fatal());
        assert!(!FanoutError::Timeout("10s".to_string()).is_fatal());
    }

    #[test]
    fn test_user_message_hides_detail() {
        let err = FanoutError::Execution("/usr/bin/java: permission denied".to_string());
        assert!(!err.user_message().contains("java"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FanoutError = json_err.into();
        assert!(matches!(err, FanoutError::Serialization(_)));
    }
}

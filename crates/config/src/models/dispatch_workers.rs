use std::time::Duration;

use fanout_core::WorkerSpec;
use serde::{Deserialize, Serialize};

use crate::validation::{ConfigValidator, ValidationUtils};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// 请求级总超时（秒），作为所有Worker调用之上的安全上界
    pub request_timeout_seconds: u64,
}

impl DispatchConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl ConfigValidator for DispatchConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_timeout_seconds(
            self.request_timeout_seconds,
            "dispatch.request_timeout_seconds",
        )
    }
}

/// 配置文件中的一条Worker记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerEntry {
    /// Worker标识，同时决定响应中的标签
    pub name: String,
    /// 可执行文件路径或命令名
    pub command: String,
    /// 固定参数；输入文本在调用时追加为最后一个位置参数
    #[serde(default)]
    pub args: Vec<String>,
    /// 单次调用超时（秒）
    pub timeout_seconds: u64,
}

impl WorkerEntry {
    pub fn to_spec(&self) -> WorkerSpec {
        WorkerSpec::new(
            self.name.clone(),
            self.command.clone(),
            self.args.clone(),
            Duration::from_secs(self.timeout_seconds),
        )
    }
}

impl ConfigValidator for WorkerEntry {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_not_empty(&self.name, "workers.name")?;
        ValidationUtils::validate_not_empty(&self.command, "workers.command")?;
        ValidationUtils::validate_timeout_seconds(self.timeout_seconds, "workers.timeout_seconds")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_config_validation() {
        let config = DispatchConfig {
            request_timeout_seconds: 15,
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(15));

        let invalid_config = DispatchConfig {
            request_timeout_seconds: 0,
        };
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_worker_entry_validation() {
        let entry = WorkerEntry {
            name: "Java".to_string(),
            command: "java".to_string(),
            args: vec!["-cp".to_string(), "classes".to_string()],
            timeout_seconds: 10,
        };
        assert!(entry.validate().is_ok());

        let mut invalid_entry = entry.clone();
        invalid_entry.name = "".to_string();
        assert!(invalid_entry.validate().is_err());

        let mut invalid_entry = entry.clone();
        invalid_entry.command = "  ".to_string();
        assert!(invalid_entry.validate().is_err());

        let mut invalid_entry = entry.clone();
        invalid_entry.timeout_seconds = 0;
        assert!(invalid_entry.validate().is_err());
    }

    #[test]
    fn test_worker_entry_to_spec() {
        let entry = WorkerEntry {
            name: "C#".to_string(),
            command: "dotnet".to_string(),
            args: vec!["CSharpProgram/bin/CSharpProgram.dll".to_string()],
            timeout_seconds: 10,
        };

        let spec = entry.to_spec();
        assert_eq!(spec.name, "C#");
        assert_eq!(spec.command, "dotnet");
        assert_eq!(spec.args, entry.args);
        assert_eq!(spec.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_worker_entry_args_default_to_empty() {
        let entry: WorkerEntry = toml::from_str(
            r#"
name = "Python"
command = "python3"
timeout_seconds = 5
"#,
        )
        .unwrap();
        assert!(entry.args.is_empty());
    }
}

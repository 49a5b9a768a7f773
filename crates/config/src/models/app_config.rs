use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use fanout_core::WorkerSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    api_observability::{ApiConfig, ObservabilityConfig},
    dispatch_workers::{DispatchConfig, WorkerEntry},
};
use crate::validation::ConfigValidator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub dispatch: DispatchConfig,
    pub workers: Vec<WorkerEntry>,
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                bind_address: "0.0.0.0:8000".to_string(),
                cors_enabled: true,
                cors_origins: vec!["http://localhost:3000".to_string()],
            },
            dispatch: DispatchConfig {
                request_timeout_seconds: 15,
            },
            workers: vec![
                WorkerEntry {
                    name: "C#".to_string(),
                    command: "dotnet".to_string(),
                    args: vec!["CSharpProgram/bin/CSharpProgram.dll".to_string()],
                    timeout_seconds: 10,
                },
                WorkerEntry {
                    name: "Java".to_string(),
                    command: "java".to_string(),
                    args: vec![
                        "-cp".to_string(),
                        "JavaProgram/target/classes".to_string(),
                        "com.example.App".to_string(),
                    ],
                    timeout_seconds: 10,
                },
                WorkerEntry {
                    name: "Python".to_string(),
                    command: "python3".to_string(),
                    args: vec!["PythonProgram/main.py".to_string()],
                    timeout_seconds: 10,
                },
            ],
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder()
            .add_source(ConfigBuilder::try_from(&AppConfig::default()).context("构建默认配置失败")?);

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("配置文件不存在: {}", path));
            }
        } else {
            let default_paths = ["config/fanout.toml", "fanout.toml", "/etc/fanout/config.toml"];

            for path in &default_paths {
                if Path::new(path).exists() {
                    builder = builder.add_source(File::new(path, FileFormat::Toml));
                    break;
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("FANOUT")
                .separator("_")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("构建配置失败")?
            .try_deserialize()
            .context("反序列化配置失败")?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str).context("解析TOML配置失败")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("序列化配置为TOML失败")
    }

    /// 构建只读的WorkerSpec列表，进程启动时调用一次
    pub fn worker_specs(&self) -> Vec<WorkerSpec> {
        self.workers.iter().map(WorkerEntry::to_spec).collect()
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.api.validate()?;
        self.dispatch.validate()?;
        self.observability.validate()?;

        if self.workers.is_empty() {
            return Err(crate::ConfigError::Validation(
                "workers cannot be empty".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for worker in &self.workers {
            worker.validate()?;
            if !seen.insert(worker.name.as_str()) {
                return Err(crate::ConfigError::Validation(format!(
                    "Duplicate worker name: {}",
                    worker.name
                )));
            }
            // 请求级超时是所有单次调用超时之上的安全上界
            if worker.timeout_seconds > self.dispatch.request_timeout_seconds {
                return Err(crate::ConfigError::Validation(format!(
                    "workers.timeout_seconds ({}) for '{}' exceeds dispatch.request_timeout_seconds ({})",
                    worker.timeout_seconds, worker.name, self.dispatch.request_timeout_seconds
                )));
            }
        }

        Ok(())
    }
}

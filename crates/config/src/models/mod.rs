mod api_observability;
mod app_config;
mod dispatch_workers;

pub use api_observability::{ApiConfig, ObservabilityConfig};
pub use app_config::AppConfig;
pub use dispatch_workers::{DispatchConfig, WorkerEntry};

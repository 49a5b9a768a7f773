pub mod aggregator;
pub mod coordinator;

pub use aggregator::{aggregate, response_label};
pub use coordinator::DispatchCoordinator;

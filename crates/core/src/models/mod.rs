mod aggregate;
mod invocation;
mod worker;

pub use aggregate::AggregateResponse;
pub use invocation::{InvocationOutcome, InvocationResult};
pub use worker::WorkerSpec;

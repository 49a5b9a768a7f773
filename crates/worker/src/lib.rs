pub mod runners;

pub use runners::{MockBehavior, MockWorkerRunner, ProcessWorkerRunner};

#[cfg(test)]
mod runners_test;

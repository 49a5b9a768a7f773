mod runner;

pub use runner::WorkerRunner;

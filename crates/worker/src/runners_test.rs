use std::time::{Duration, Instant};

use fanout_core::{InvocationOutcome, WorkerRunner, WorkerSpec};
use tokio_util::sync::CancellationToken;

use crate::runners::{MockBehavior, MockWorkerRunner};

fn spec(name: &str) -> WorkerSpec {
    WorkerSpec::new(name, "unused", vec![], Duration::from_secs(5))
}

#[tokio::test]
async fn test_mock_runner_default_behavior_succeeds() {
    let runner = MockWorkerRunner::new();
    let result = runner
        .invoke(&spec("C#"), "hi", CancellationToken::new())
        .await;

    assert!(result.is_success());
    assert_eq!(result.worker, "C#");
    assert_eq!(result.output.as_deref(), Some("mock output from C#"));
}

#[tokio::test]
async fn test_mock_runner_scripted_failure() {
    let runner = MockWorkerRunner::new().with_behavior(
        "Java",
        MockBehavior::Fail {
            detail: "exit 1".to_string(),
            delay: Duration::ZERO,
        },
    );

    let result = runner
        .invoke(&spec("Java"), "hi", CancellationToken::new())
        .await;

    assert_eq!(result.outcome, InvocationOutcome::Failure);
    assert_eq!(result.error_detail.as_deref(), Some("exit 1"));
    assert_eq!(result.exit_code, Some(1));
}

#[tokio::test]
async fn test_mock_runner_hang_returns_on_cancel() {
    let runner = MockWorkerRunner::new().with_behavior("Python", MockBehavior::Hang);
    let cancel = CancellationToken::new();

    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let start = Instant::now();
    let result = runner.invoke(&spec("Python"), "hi", cancel).await;

    assert_eq!(result.outcome, InvocationOutcome::Failure);
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_mock_runner_delay_is_observed() {
    let runner = MockWorkerRunner::new().with_behavior(
        "C#",
        MockBehavior::Succeed {
            output: "late".to_string(),
            delay: Duration::from_millis(100),
        },
    );

    let start = Instant::now();
    let result = runner
        .invoke(&spec("C#"), "hi", CancellationToken::new())
        .await;

    assert!(result.is_success());
    assert!(start.elapsed() >= Duration::from_millis(100));
}

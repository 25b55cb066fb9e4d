#![cfg(unix)]

use std::error::Error;
use std::time::{Duration, Instant};

use fanrun::exec::{CommandSpec, ExecError, GroupRunner};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn sleeps_overlap_instead_of_serializing() -> TestResult {
    let specs = vec![
        CommandSpec::new(["sleep", "0.5"])?,
        CommandSpec::new(["sleep", "0.6"])?,
    ];

    let start = Instant::now();
    let result = GroupRunner::new().run(specs).await?;
    let elapsed = start.elapsed();

    assert_eq!(result.len(), 2);
    assert!(result.all_launched());
    // Serial execution would take at least 1.1s.
    assert!(elapsed < Duration::from_millis(1000), "took {elapsed:?}");
    Ok(())
}

#[tokio::test]
async fn pipe_buffer_sized_output_does_not_deadlock() -> TestResult {
    // Well past the usual 64 KiB pipe buffer, on both streams at once.
    let spec = CommandSpec::new([
        "sh",
        "-c",
        "yes x | head -c 1048576; yes e | head -c 262144 >&2",
    ])?;

    let result = GroupRunner::new().run(vec![spec]).await?;

    assert_eq!(result[0].exit_code, Some(0));
    assert_eq!(result[0].stdout.len(), 1_048_576);
    assert_eq!(result[0].stderr.len(), 262_144);
    Ok(())
}

#[tokio::test]
async fn deadline_kills_runaway_command() -> TestResult {
    let specs = vec![
        CommandSpec::new(["sleep", "30"])?,
        CommandSpec::new(["echo", "quick"])?,
    ];

    let start = Instant::now();
    let result = GroupRunner::new()
        .with_deadline(Duration::from_millis(300))
        .run(specs)
        .await?;
    let elapsed = start.elapsed();

    assert!(matches!(
        result[0].error,
        Some(ExecError::DeadlineExceeded(_))
    ));
    assert_eq!(result[0].exit_code, None);
    assert!(!result.all_launched());

    assert_eq!(result[1].exit_code, Some(0));
    assert_eq!(result[1].stdout, b"quick\n");

    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
    Ok(())
}

#[tokio::test]
async fn output_before_deadline_is_kept() -> TestResult {
    let spec = CommandSpec::new(["sh", "-c", "echo early; sleep 30"])?;

    let result = GroupRunner::new()
        .with_deadline(Duration::from_millis(300))
        .run(vec![spec])
        .await?;

    assert!(matches!(
        result[0].error,
        Some(ExecError::DeadlineExceeded(_))
    ));
    assert_eq!(result[0].stdout, b"early\n");
    Ok(())
}

#![cfg(unix)]

use std::error::Error;

use fanrun::exec::{CommandSpec, ExecError, GroupRunner};
use fanrun::report;

type TestResult = Result<(), Box<dyn Error>>;

fn sh(script: &str) -> CommandSpec {
    CommandSpec::new(["sh", "-c", script]).expect("sh spec is always valid")
}

#[tokio::test]
async fn result_is_index_aligned_with_input() -> TestResult {
    let specs = vec![
        CommandSpec::new(["echo", "first"])?,
        CommandSpec::new(["echo", "second"])?,
        CommandSpec::new(["echo", "third"])?,
    ];

    let result = GroupRunner::new().run(specs).await?;

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].stdout, b"first\n");
    assert_eq!(result[1].stdout, b"second\n");
    assert_eq!(result[2].stdout, b"third\n");
    Ok(())
}

#[tokio::test]
async fn echo_and_false_yield_independent_outcomes() -> TestResult {
    let specs = vec![
        CommandSpec::new(["echo", "hi"])?,
        CommandSpec::new(["false"])?,
    ];

    let result = GroupRunner::new().run(specs).await?;

    assert_eq!(result[0].exit_code, Some(0));
    assert_eq!(result[0].stdout, b"hi\n");
    assert!(result[0].success());

    assert_eq!(result[1].exit_code, Some(1));
    assert!(result[1].stdout.is_empty());
    assert!(!result[1].success());

    // Non-zero exits are the caller's business, not harness failures.
    assert_eq!(report::exit_code(&result), 0);
    Ok(())
}

#[tokio::test]
async fn missing_executable_does_not_abort_siblings() -> TestResult {
    let specs = vec![
        CommandSpec::new(["./definitely-not-here-4af1"])?,
        CommandSpec::new(["echo", "alive"])?,
    ];

    let result = GroupRunner::new().run(specs).await?;

    assert_eq!(result.len(), 2);
    assert!(matches!(result[0].error, Some(ExecError::Launch(_))));
    assert_eq!(result[0].exit_code, None);

    assert_eq!(result[1].exit_code, Some(0));
    assert_eq!(result[1].stdout, b"alive\n");

    assert_eq!(report::exit_code(&result), 1);
    Ok(())
}

#[tokio::test]
async fn streams_are_never_swapped_or_merged() -> TestResult {
    let specs = vec![sh("echo A"), sh("echo B >&2; exit 3")];

    let result = GroupRunner::new().run(specs).await?;

    assert_eq!(result[0].exit_code, Some(0));
    assert_eq!(result[0].stdout, b"A\n");
    assert!(result[0].stderr.is_empty());

    assert_eq!(result[1].exit_code, Some(3));
    assert!(result[1].stdout.is_empty());
    assert_eq!(result[1].stderr, b"B\n");
    Ok(())
}

#[tokio::test]
async fn signal_death_is_recorded_as_data() -> TestResult {
    let result = GroupRunner::new().run(vec![sh("kill -TERM $$")]).await?;

    assert!(matches!(result[0].error, Some(ExecError::Signaled(15))));
    assert_eq!(result[0].exit_code, None);

    // The process launched and was awaited; the harness still exits clean.
    assert_eq!(report::exit_code(&result), 0);
    Ok(())
}

#[tokio::test]
async fn cwd_is_applied_per_command() -> TestResult {
    let dir = tempfile::tempdir()?;
    let spec = CommandSpec::new(["pwd"])?.with_cwd(dir.path());

    let result = GroupRunner::new().run(vec![spec]).await?;

    let out = String::from_utf8(result[0].stdout.clone())?;
    let expected = dir.path().canonicalize()?;
    assert_eq!(out.trim_end(), expected.to_string_lossy());
    Ok(())
}

#[test]
fn empty_specs_are_rejected() {
    assert!(CommandSpec::new(Vec::<String>::new()).is_err());
    assert!(CommandSpec::new([""]).is_err());
    assert!(CommandSpec::from_line("").is_err());
}

#[test]
fn from_line_respects_quoting() -> TestResult {
    let spec = CommandSpec::from_line("./generator \"0-1 0-2\" 1-2")?;

    assert_eq!(spec.program(), "./generator");
    assert_eq!(spec.tokens().len(), 3);
    assert_eq!(spec.tokens()[1], "0-1 0-2");
    assert_eq!(spec.tokens()[2], "1-2");
    Ok(())
}

use omnifetch::platform::command::{is_available, CommandRunner, DEFAULT_TIMEOUT};
use omnifetch::FetchError;
use std::time::{Duration, Instant};

#[test]
fn test_default_timeout() {
    assert_eq!(CommandRunner::default().timeout(), DEFAULT_TIMEOUT);
    assert_eq!(DEFAULT_TIMEOUT, Duration::from_millis(5000));
}

#[test]
fn test_missing_program() {
    let result = CommandRunner::default().run("omnifetch-no-such-tool", &["--version"]);
    assert!(matches!(result, Err(FetchError::CommandNotFound(name)) if name == "omnifetch-no-such-tool"));
    assert!(!is_available("omnifetch-no-such-tool"));
}

#[cfg(unix)]
#[test]
fn test_slow_command_is_killed() {
    let runner = CommandRunner::new(Duration::from_millis(200));
    let started = Instant::now();
    let result = runner.run("sleep", &["10"]);

    assert!(matches!(result, Err(FetchError::CommandTimeout { .. })));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[cfg(unix)]
#[test]
fn test_failed_command() {
    let result = CommandRunner::default().run("sh", &["-c", "echo partial; exit 3"]);
    assert!(matches!(result, Err(FetchError::CommandFailed { .. })));
}

#[cfg(unix)]
#[test]
fn test_output_is_trimmed() {
    let output = CommandRunner::default()
        .run("sh", &["-c", "printf '  Pop!_OS 22.04 LTS\\n\\n'"])
        .unwrap();
    assert_eq!(output, "Pop!_OS 22.04 LTS");
}

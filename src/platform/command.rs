//! External command execution with a hard timeout.
//!
//! Every probe that shells out goes through [`CommandRunner`]. The child's
//! stdout is drained on a helper thread so a chatty program (`dpkg -l`,
//! `system_profiler`) cannot fill the pipe and stall, and a child that
//! outlives the deadline is killed and reaped before returning.

use crate::error::{FetchError, Result};
use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Default timeout applied to each external command
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy)]
pub struct CommandRunner {
    timeout: Duration,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl CommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `program` with `args` and return its trimmed stdout.
    ///
    /// Fails when the program is missing, exits non-zero, or runs past the
    /// timeout.
    pub fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        log::trace!("running {} {:?}", program, args);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => FetchError::CommandNotFound(program.to_string()),
                _ => FetchError::Io(e),
            })?;

        let deadline = Instant::now() + self.timeout;
        let (tx, rx) = mpsc::channel();
        if let Some(mut stdout) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = Vec::new();
                // The receiver is gone once the deadline passed
                let _ = tx.send(stdout.read_to_end(&mut buf).map(|_| buf));
            });
        } else {
            drop(tx);
        }

        let status = match wait_until(&mut child, deadline) {
            Ok(Some(status)) => status,
            Ok(None) => {
                kill_and_reap(&mut child);
                return Err(self.timed_out(program));
            }
            Err(e) => {
                kill_and_reap(&mut child);
                return Err(FetchError::Io(e));
            }
        };

        // A background grandchild can hold the pipe open after the child exits
        let stdout = match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(read) => read?,
            Err(mpsc::RecvTimeoutError::Timeout) => return Err(self.timed_out(program)),
            Err(mpsc::RecvTimeoutError::Disconnected) => Vec::new(),
        };

        if !status.success() {
            return Err(FetchError::CommandFailed {
                program: program.to_string(),
                status: status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }

    /// Like [`run`](Self::run), but an empty output also counts as a failure.
    pub fn run_non_empty(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = self.run(program, args)?;
        if output.is_empty() {
            return Err(FetchError::not_found(format!("{program} printed nothing")));
        }
        Ok(output)
    }

    fn timed_out(&self, program: &str) -> FetchError {
        log::debug!("{} timed out after {:?}", program, self.timeout);
        FetchError::CommandTimeout {
            program: program.to_string(),
            timeout: self.timeout,
        }
    }
}

fn wait_until(child: &mut Child, deadline: Instant) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn kill_and_reap(child: &mut Child) {
    // The child may already have exited between the last poll and the kill
    let _ = child.kill();
    let _ = child.wait();
}

/// Whether `program` can be found on `PATH`
pub fn is_available(program: &str) -> bool {
    which::which(program).is_ok()
}

use std::ffi::OsString;
use std::io;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::application::scope::Cancellation;

const STDERR_TAIL_CHARS: usize = 512;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("'{program}' was cancelled")]
    Cancelled { program: String },
    #[error("'{program}' timed out after {}s", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },
    #[error("'{program}' exited with code {code:?}: {stderr}")]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl ProcessError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

/// Runs `program` to completion, killing it when `cancellation` fires or `timeout` elapses.
pub async fn run_command(
    program: &str,
    args: &[OsString],
    cancellation: &Cancellation,
    timeout: Duration,
) -> Result<(), ProcessError> {
    if cancellation.is_cancelled() {
        return Err(ProcessError::Cancelled {
            program: program.to_string(),
        });
    }

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        })?;

    tracing::debug!(program = %program, pid = child.id(), "Spawned process");

    // Dropping the wait future drops the child, which kills it.
    let output = tokio::select! {
        output = tokio::time::timeout(timeout, child.wait_with_output()) => match output {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(ProcessError::Spawn {
                    program: program.to_string(),
                    source,
                });
            }
            Err(_) => {
                return Err(ProcessError::TimedOut {
                    program: program.to_string(),
                    timeout,
                });
            }
        },
        _ = cancellation.cancelled() => {
            tracing::debug!(program = %program, "Killing process after cancellation");
            return Err(ProcessError::Cancelled {
                program: program.to_string(),
            });
        }
    };

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(ProcessError::Failed {
        program: program.to_string(),
        code: output.status.code(),
        stderr: tail(stderr.trim(), STDERR_TAIL_CHARS),
    })
}

fn tail(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    let skipped: String = text.chars().skip(count - max_chars).collect();
    format!("...{skipped}")
}

//! Child-process helpers shared by the command-backed environments.

use std::io;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::domain::AppError;

pub(crate) fn describe(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(command.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run to completion with captured output; non-zero exit is an error.
pub(crate) fn capture(mut command: Command, operation: &str) -> Result<String, AppError> {
    let described = describe(&command);
    debug!(operation, command = %described, "running command");

    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(operation, &described, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(operation, status = %output.status, "command failed");
        return Err(AppError::environment(
            operation,
            if stderr.is_empty() {
                format!("'{described}' exited with {}", output.status)
            } else {
                format!("'{described}' exited with {}: {stderr}", output.status)
            },
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run with the invoking terminal attached; blocks until the child exits.
///
/// The child's stdout is routed to our stderr, keeping stdout for the result.
pub(crate) fn attach(mut command: Command, operation: &str) -> Result<(), AppError> {
    let described = describe(&command);
    debug!(operation, command = %described, "attaching terminal");

    let status = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::from(io::stderr()))
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| spawn_error(operation, &described, e))?;

    if !status.success() {
        return Err(AppError::environment(
            operation,
            format!("interactive session ended with {status} before an answer was recorded"),
        ));
    }
    Ok(())
}

fn spawn_error(operation: &str, described: &str, e: io::Error) -> AppError {
    AppError::environment(operation, format!("failed to spawn '{described}': {e}"))
}

pub(crate) fn split_program(
    argv: &[String],
    operation: &str,
) -> Result<(String, Vec<String>), AppError> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| AppError::environment(operation, "empty command line"))?;
    Ok((program.clone(), args.to_vec()))
}

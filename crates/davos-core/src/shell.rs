//! Captured-output command runner.
//!
//! Installers are run with stdin closed and both output streams piped, so a
//! failure can be reported with everything the installer printed.

use std::process::{Command, Stdio};

use thiserror::Error;

use crate::error::CalledProcessError;

/// Why a command could not be run to a successful exit.
#[derive(Error, Debug)]
pub enum ShellError {
    /// The argv was empty.
    #[error("cannot run an empty command")]
    EmptyCommand,

    /// The program is not on `PATH`.
    #[error("'{0}' not found on PATH")]
    NotFound(String),

    /// The program exists but could not be started.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error(transparent)]
    Failed(#[from] CalledProcessError),
}

/// Run `argv` to completion and return its captured stdout.
///
/// Both streams are decoded lossily as UTF-8.
///
/// # Errors
///
/// Returns [`ShellError::EmptyCommand`] for an empty argv,
/// [`ShellError::NotFound`] if `argv[0]` cannot be resolved,
/// [`ShellError::Spawn`] if the process cannot be started, and
/// [`ShellError::Failed`] carrying the exit code and captured streams if the
/// process exits with a non-zero status.
pub fn run_shell_command<S: AsRef<str>>(argv: &[S]) -> Result<String, ShellError> {
    let (program, args) = argv.split_first().ok_or(ShellError::EmptyCommand)?;
    let program = program.as_ref();
    let resolved =
        which::which(program).map_err(|_| ShellError::NotFound(program.to_string()))?;

    let command: Vec<String> = argv.iter().map(|arg| arg.as_ref().to_string()).collect();
    tracing::debug!("Running `{}`", command.join(" "));

    let output = Command::new(&resolved)
        .args(args.iter().map(|arg| arg.as_ref()))
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ShellError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if output.status.success() {
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    tracing::debug!(
        "`{}` exited with {:?}",
        command.join(" "),
        output.status.code()
    );
    Err(CalledProcessError::new(command, output.status.code())
        .with_output(stdout)
        .with_stderr(stderr)
        .into())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::SubprocessFailure;

    #[test]
    fn success_returns_stdout() {
        let out = run_shell_command(&["sh", "-c", "echo hello"]).unwrap();
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn failure_captures_streams_and_code() {
        let err = run_shell_command(&["sh", "-c", "echo out; echo err >&2; exit 3"]).unwrap_err();
        let process = match err {
            ShellError::Failed(process) => process,
            other => panic!("expected Failed, got {other:?}"),
        };
        assert_eq!(process.exit_code(), Some(3));
        assert_eq!(process.output(), Some("out\n"));
        assert_eq!(process.stderr(), Some("err\n"));
        assert_eq!(process.command()[0], "sh");
    }

    #[test]
    fn missing_program_is_not_found() {
        let err = run_shell_command(&["davos-test-no-such-program"]).unwrap_err();
        assert!(matches!(err, ShellError::NotFound(ref p) if p == "davos-test-no-such-program"));
    }

    #[test]
    fn empty_argv_is_rejected() {
        let argv: [&str; 0] = [];
        assert!(matches!(
            run_shell_command(&argv),
            Err(ShellError::EmptyCommand)
        ));
    }
}

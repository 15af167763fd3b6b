//! Smuggler-family errors: everything that goes wrong while installing.

use std::fmt;

use thiserror::Error;

use super::capability::SubprocessFailure;

/// Root of the smuggler family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SmugglerError {
    /// A smuggling failure unrelated to the installer's exit status,
    /// e.g. an invalid package spec or a missing installer program.
    #[error("{0}")]
    Message(String),

    /// The installer subprocess exited unsuccessfully.
    #[error(transparent)]
    Installer(#[from] InstallerError),
}

impl SmugglerError {
    /// A plain smuggler error with the given message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// The installer failure, if this is one.
    pub fn as_installer(&self) -> Option<&InstallerError> {
        match self {
            Self::Installer(err) => Some(err),
            Self::Message(_) => None,
        }
    }
}

/// A command that exited with a non-zero status, plus whatever it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalledProcessError {
    command: Vec<String>,
    exit_code: Option<i32>,
    output: Option<String>,
    stderr: Option<String>,
}

impl CalledProcessError {
    /// A failure of `command`; `exit_code` is `None` for signal termination.
    ///
    /// A zero exit status is not a failure and must never reach here.
    pub fn new<I, S>(command: I, exit_code: Option<i32>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        debug_assert_ne!(exit_code, Some(0), "exit status 0 is not a failure");
        Self {
            command: command.into_iter().map(Into::into).collect(),
            exit_code,
            output: None,
            stderr: None,
        }
    }

    /// Attach captured standard output.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Attach captured standard error.
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = Some(stderr.into());
        self
    }

    /// The argv joined with spaces.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

impl fmt::Display for CalledProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exit_code {
            Some(code) => write!(
                f,
                "Command '{}' returned non-zero exit status {code}.",
                self.command_line()
            ),
            None => write!(
                f,
                "Command '{}' was terminated by a signal.",
                self.command_line()
            ),
        }
    }
}

impl std::error::Error for CalledProcessError {}

impl SubprocessFailure for CalledProcessError {
    fn command(&self) -> &[String] {
        &self.command
    }

    fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn stderr(&self) -> Option<&str> {
        self.stderr.as_deref()
    }
}

/// The package installer exited with a non-zero status.
///
/// Captured stdout is only rendered when stderr has nothing to say, unless
/// [`InstallerError::show_stdout`] overrides that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerError {
    message: String,
    details: Vec<String>,
    process: CalledProcessError,
    show_stdout: Option<bool>,
}

impl InstallerError {
    /// An installer failure described by `message`, caused by `process`.
    ///
    /// Streams already captured on `process` are kept.
    pub fn new(message: impl Into<String>, process: CalledProcessError) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
            process,
            show_stdout: None,
        }
    }

    /// Attach captured standard output.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.process = self.process.with_output(output);
        self
    }

    /// Attach captured standard error.
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.process = self.process.with_stderr(stderr);
        self
    }

    /// Append a detail line rendered below the exit status.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Force captured stdout to be shown (`true`) or hidden (`false`).
    pub fn show_stdout(mut self, show: bool) -> Self {
        self.show_stdout = Some(show);
        self
    }

    /// The top-line message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extra detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// The underlying process failure.
    pub fn process(&self) -> &CalledProcessError {
        &self.process
    }

    /// Whether the rendered message includes captured stdout.
    pub fn shows_stdout(&self) -> bool {
        self.show_stdout
            .unwrap_or_else(|| non_empty(self.process.stderr.as_deref()).is_none())
    }
}

impl fmt::Display for InstallerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.message, self.process)?;
        for detail in &self.details {
            write!(f, "\n{detail}")?;
        }
        if let Some(stderr) = non_empty(self.process.stderr.as_deref()) {
            write!(f, "\n\nCaptured stderr:\n{}", stderr.trim_end())?;
        }
        let output = non_empty(self.process.output.as_deref()).filter(|_| self.shows_stdout());
        if let Some(output) = output {
            write!(f, "\n\nCaptured stdout:\n{}", output.trim_end())?;
        }
        Ok(())
    }
}

impl std::error::Error for InstallerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.process)
    }
}

impl SubprocessFailure for InstallerError {
    fn command(&self) -> &[String] {
        self.process.command()
    }

    fn exit_code(&self) -> Option<i32> {
        self.process.exit_code()
    }

    fn output(&self) -> Option<&str> {
        self.process.output()
    }

    fn stderr(&self) -> Option<&str> {
        self.process.stderr()
    }
}

fn non_empty(stream: Option<&str>) -> Option<&str> {
    stream.filter(|s| !s.trim().is_empty())
}

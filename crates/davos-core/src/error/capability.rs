//! Capabilities an error can carry independently of its family.
//!
//! A single error value may satisfy several of these at once. An
//! [`OnionArgumentError`](super::OnionArgumentError) is both a
//! [`SyntaxIssue`] and an [`ArgumentIssue`], so a handler that only cares
//! about bad arguments can pick it out without knowing anything about onions.

use super::parser::SyntaxContext;

/// An error that can point at a location inside a piece of source text.
pub trait SyntaxIssue {
    /// The message, text and offset describing the failure location.
    fn syntax_context(&self) -> &SyntaxContext;

    /// The offending source text.
    fn text(&self) -> &str {
        self.syntax_context().text()
    }

    /// Character offset of the failure within [`SyntaxIssue::text`].
    fn offset(&self) -> usize {
        self.syntax_context().offset()
    }
}

/// An error raised while validating a single argument or flag.
pub trait ArgumentIssue {
    /// Name of the argument that failed validation, if known.
    fn argument_name(&self) -> Option<&str>;

    /// Why the argument was rejected.
    fn reason(&self) -> &str;
}

/// A recognized feature that is not supported yet.
pub trait NotImplementedIssue {
    /// Human-readable description of the unsupported feature.
    fn unsupported_feature(&self) -> &str;
}

/// A subprocess that exited unsuccessfully.
pub trait SubprocessFailure {
    /// The argv that was executed.
    fn command(&self) -> &[String];

    /// Exit code, or `None` if the process was terminated by a signal.
    fn exit_code(&self) -> Option<i32>;

    /// Captured standard output, if any was collected.
    fn output(&self) -> Option<&str>;

    /// Captured standard error, if any was collected.
    fn stderr(&self) -> Option<&str>;
}

//! Parser-family errors.
//!
//! Every error here carries a [`SyntaxContext`] and renders like a syntax
//! error: the message, then the offending text, then a caret under the
//! failure offset.
//!
//! ```text
//! argument --foo: bad flag
//! # pip: --foo
//!        ^
//! ```

use std::fmt;

use thiserror::Error;

use super::capability::{ArgumentIssue, NotImplementedIssue, SyntaxIssue};

/// Message used when a parser error is built without one.
pub const DEFAULT_PARSER_MESSAGE: &str = "invalid syntax";

/// Message used when an onion parser error is built without one.
pub const DEFAULT_ONION_MESSAGE: &str = "failed to parse onion comment";

/// Message used when an onion argument error is built without one.
pub const DEFAULT_ARGUMENT_MESSAGE: &str = "invalid argument";

/// Message used when a not-implemented error is built without one.
pub const DEFAULT_NOT_IMPLEMENTED_MESSAGE: &str = "feature not implemented";

/// Location and description of a parse failure.
///
/// All fields are optional; an empty context renders as the default message
/// over an empty line with a caret in column zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxContext {
    message: Option<String>,
    text: String,
    offset: usize,
    details: Vec<String>,
}

impl SyntaxContext {
    /// An empty context: no message, empty text, offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the offending source text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the character offset of the failure within the text.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Append a detail line rendered below the pointer.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// The message, if one was given.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The offending source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character offset of the failure within the text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Extra detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// The caret line: `offset` spaces followed by `^`.
    pub fn pointer_line(&self) -> String {
        format!("{}^", " ".repeat(self.offset))
    }

    pub(crate) fn or_message(mut self, default: &str) -> Self {
        if self.message.is_none() {
            self.message = Some(default.to_string());
        }
        self
    }

    pub(crate) fn write_report(&self, f: &mut fmt::Formatter<'_>, headline: &str) -> fmt::Result {
        writeln!(f, "{headline}")?;
        writeln!(f, "{}", self.text.trim_end_matches(['\r', '\n']))?;
        f.write_str(&self.pointer_line())?;
        for detail in &self.details {
            write!(f, "\n{detail}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SyntaxContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f, self.message().unwrap_or(DEFAULT_PARSER_MESSAGE))
    }
}

/// Root of the parser family: a syntax-level problem in tool-recognized
/// source annotations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DavosParserError {
    /// A general syntax error not specific to onions.
    #[error("{0}")]
    Syntax(SyntaxContext),

    /// Failure while parsing an onion comment.
    #[error(transparent)]
    Onion(#[from] OnionParserError),
}

impl DavosParserError {
    /// A general parser error from the given context.
    pub fn new(context: SyntaxContext) -> Self {
        Self::Syntax(context)
    }

    /// The onion-specific error, if this is one.
    pub fn as_onion(&self) -> Option<&OnionParserError> {
        match self {
            Self::Onion(err) => Some(err),
            Self::Syntax(_) => None,
        }
    }
}

impl Default for DavosParserError {
    fn default() -> Self {
        Self::new(SyntaxContext::new())
    }
}

impl SyntaxIssue for DavosParserError {
    fn syntax_context(&self) -> &SyntaxContext {
        match self {
            Self::Syntax(ctx) => ctx,
            Self::Onion(err) => err.syntax_context(),
        }
    }
}

impl From<OnionArgumentError> for DavosParserError {
    fn from(err: OnionArgumentError) -> Self {
        Self::Onion(err.into())
    }
}

impl From<ParserNotImplementedError> for DavosParserError {
    fn from(err: ParserNotImplementedError) -> Self {
        Self::Onion(err.into())
    }
}

/// Failure while parsing an onion (an inline per-line install directive).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnionParserError {
    /// Malformed onion syntax.
    #[error("{0}")]
    Syntax(SyntaxContext),

    /// An argument inside the onion failed validation.
    #[error(transparent)]
    Argument(#[from] OnionArgumentError),

    /// The onion uses a feature that is recognized but unsupported.
    #[error(transparent)]
    NotImplemented(#[from] ParserNotImplementedError),
}

impl OnionParserError {
    /// An onion syntax error from the given context.
    pub fn new(context: SyntaxContext) -> Self {
        Self::Syntax(context.or_message(DEFAULT_ONION_MESSAGE))
    }

    /// The argument-validation view of this error, if it has one.
    pub fn as_argument_issue(&self) -> Option<&dyn ArgumentIssue> {
        match self {
            Self::Argument(err) => Some(err),
            Self::Syntax(_) | Self::NotImplemented(_) => None,
        }
    }

    /// The not-implemented view of this error, if it has one.
    pub fn as_not_implemented(&self) -> Option<&dyn NotImplementedIssue> {
        match self {
            Self::NotImplemented(err) => Some(err),
            Self::Syntax(_) | Self::Argument(_) => None,
        }
    }
}

impl Default for OnionParserError {
    fn default() -> Self {
        Self::new(SyntaxContext::new())
    }
}

impl SyntaxIssue for OnionParserError {
    fn syntax_context(&self) -> &SyntaxContext {
        match self {
            Self::Syntax(ctx) => ctx,
            Self::Argument(err) => err.syntax_context(),
            Self::NotImplemented(err) => err.syntax_context(),
        }
    }
}

/// An argument or flag inside an onion comment failed validation.
///
/// The caret points at the first occurrence of the argument in the onion
/// text, or at column zero when the argument does not appear there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnionArgumentError {
    context: SyntaxContext,
    argument: Option<String>,
}

impl OnionArgumentError {
    /// An argument error for the given raw onion comment.
    pub fn new(onion_text: impl Into<String>) -> Self {
        Self {
            context: SyntaxContext::new().with_text(onion_text),
            argument: None,
        }
    }

    /// Name the offending argument and point the caret at it.
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        let argument = argument.into();
        let offset = self
            .context
            .text()
            .find(argument.as_str())
            .map_or(0, |byte| self.context.text()[..byte].chars().count());
        self.context = self.context.with_offset(offset);
        self.argument = Some(argument);
        self
    }

    /// Set the human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.context = self.context.with_message(message);
        self
    }

    /// Append a detail line rendered below the pointer.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.context = self.context.with_detail(detail);
        self
    }

    /// The offending argument, if one was named.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// The raw onion comment that failed argument parsing.
    pub fn onion_text(&self) -> &str {
        self.context.text()
    }

    /// The message, falling back to [`DEFAULT_ARGUMENT_MESSAGE`].
    pub fn message(&self) -> &str {
        self.context.message().unwrap_or(DEFAULT_ARGUMENT_MESSAGE)
    }
}

impl fmt::Display for OnionArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(argument) => {
                let headline = format!("argument {argument}: {}", self.message());
                self.context.write_report(f, &headline)
            }
            None => self.context.write_report(f, self.message()),
        }
    }
}

impl std::error::Error for OnionArgumentError {}

impl SyntaxIssue for OnionArgumentError {
    fn syntax_context(&self) -> &SyntaxContext {
        &self.context
    }
}

impl ArgumentIssue for OnionArgumentError {
    fn argument_name(&self) -> Option<&str> {
        self.argument()
    }

    fn reason(&self) -> &str {
        self.message()
    }
}

/// A recognized onion feature that is not supported yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserNotImplementedError {
    context: SyntaxContext,
}

impl ParserNotImplementedError {
    /// A not-implemented error from the given context.
    pub fn new(context: SyntaxContext) -> Self {
        Self {
            context: context.or_message(DEFAULT_NOT_IMPLEMENTED_MESSAGE),
        }
    }
}

impl Default for ParserNotImplementedError {
    fn default() -> Self {
        Self::new(SyntaxContext::new())
    }
}

impl fmt::Display for ParserNotImplementedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.context, f)
    }
}

impl std::error::Error for ParserNotImplementedError {}

impl SyntaxIssue for ParserNotImplementedError {
    fn syntax_context(&self) -> &SyntaxContext {
        &self.context
    }
}

impl NotImplementedIssue for ParserNotImplementedError {
    fn unsupported_feature(&self) -> &str {
        self.context
            .message()
            .unwrap_or(DEFAULT_NOT_IMPLEMENTED_MESSAGE)
    }
}

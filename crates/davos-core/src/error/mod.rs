//! The davos error taxonomy.
//!
//! Seven kinds in two families under one root:
//!
//! ```text
//! DavosError
//! ├── DavosParserError
//! │   └── OnionParserError
//! │       ├── OnionArgumentError        (+ ArgumentIssue)
//! │       └── ParserNotImplementedError (+ NotImplementedIssue)
//! └── SmugglerError
//!     └── InstallerError                (+ SubprocessFailure)
//! ```
//!
//! Families are nested enums, so a leaf converts into any of its ancestors
//! with `?` or `.into()`. Capabilities that cut across families are traits
//! ([`SyntaxIssue`], [`ArgumentIssue`], [`NotImplementedIssue`],
//! [`SubprocessFailure`]); [`DavosError`] exposes an `as_*` accessor for each
//! so a boundary handler can match on whichever view it cares about.

mod capability;
mod parser;
mod smuggler;

pub use capability::{ArgumentIssue, NotImplementedIssue, SubprocessFailure, SyntaxIssue};
pub use parser::{
    DEFAULT_ARGUMENT_MESSAGE, DEFAULT_NOT_IMPLEMENTED_MESSAGE, DEFAULT_ONION_MESSAGE,
    DEFAULT_PARSER_MESSAGE, DavosParserError, OnionArgumentError, OnionParserError,
    ParserNotImplementedError, SyntaxContext,
};
pub use smuggler::{CalledProcessError, InstallerError, SmugglerError};

use std::fmt;

use thiserror::Error;

/// Root of every davos-specific failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DavosError {
    /// A failure not covered by a more specific kind.
    #[error("{0}")]
    Message(String),

    /// Parser family.
    #[error(transparent)]
    Parser(#[from] DavosParserError),

    /// Smuggler family.
    #[error(transparent)]
    Smuggler(#[from] SmugglerError),
}

impl DavosError {
    /// A root-level error with the given message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// The most specific kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Message(_) => ErrorKind::Davos,
            Self::Parser(DavosParserError::Syntax(_)) => ErrorKind::Parser,
            Self::Parser(DavosParserError::Onion(onion)) => match onion {
                OnionParserError::Syntax(_) => ErrorKind::OnionParser,
                OnionParserError::Argument(_) => ErrorKind::OnionArgument,
                OnionParserError::NotImplemented(_) => ErrorKind::ParserNotImplemented,
            },
            Self::Smuggler(SmugglerError::Message(_)) => ErrorKind::Smuggler,
            Self::Smuggler(SmugglerError::Installer(_)) => ErrorKind::Installer,
        }
    }

    /// Whether this error would be caught by a handler for `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind().is_a(kind)
    }

    /// The parser-family view of this error.
    pub fn as_parser_error(&self) -> Option<&DavosParserError> {
        match self {
            Self::Parser(err) => Some(err),
            Self::Message(_) | Self::Smuggler(_) => None,
        }
    }

    /// The onion-parser view of this error.
    pub fn as_onion_parser_error(&self) -> Option<&OnionParserError> {
        self.as_parser_error().and_then(DavosParserError::as_onion)
    }

    /// The smuggler-family view of this error.
    pub fn as_smuggler_error(&self) -> Option<&SmugglerError> {
        match self {
            Self::Smuggler(err) => Some(err),
            Self::Message(_) | Self::Parser(_) => None,
        }
    }

    /// The syntax view: text and offset of the failure.
    pub fn as_syntax_issue(&self) -> Option<&dyn SyntaxIssue> {
        self.as_parser_error().map(|err| err as &dyn SyntaxIssue)
    }

    /// The argument-validation view, for errors that carry one.
    pub fn as_argument_issue(&self) -> Option<&dyn ArgumentIssue> {
        self.as_onion_parser_error()
            .and_then(OnionParserError::as_argument_issue)
    }

    /// The not-implemented view, for errors that carry one.
    pub fn as_not_implemented(&self) -> Option<&dyn NotImplementedIssue> {
        self.as_onion_parser_error()
            .and_then(OnionParserError::as_not_implemented)
    }

    /// The subprocess-failure view, for errors that carry one.
    pub fn as_subprocess_failure(&self) -> Option<&dyn SubprocessFailure> {
        self.as_smuggler_error()
            .and_then(SmugglerError::as_installer)
            .map(|err| err as &dyn SubprocessFailure)
    }
}

impl From<OnionParserError> for DavosError {
    fn from(err: OnionParserError) -> Self {
        Self::Parser(err.into())
    }
}

impl From<OnionArgumentError> for DavosError {
    fn from(err: OnionArgumentError) -> Self {
        Self::Parser(err.into())
    }
}

impl From<ParserNotImplementedError> for DavosError {
    fn from(err: ParserNotImplementedError) -> Self {
        Self::Parser(err.into())
    }
}

impl From<InstallerError> for DavosError {
    fn from(err: InstallerError) -> Self {
        Self::Smuggler(err.into())
    }
}

/// The closed set of error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// [`DavosError`]
    Davos,
    /// [`DavosParserError`]
    Parser,
    /// [`OnionParserError`]
    OnionParser,
    /// [`OnionArgumentError`]
    OnionArgument,
    /// [`ParserNotImplementedError`]
    ParserNotImplemented,
    /// [`SmugglerError`]
    Smuggler,
    /// [`InstallerError`]
    Installer,
}

impl ErrorKind {
    /// Every exported kind, root first.
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::Davos,
        ErrorKind::Parser,
        ErrorKind::OnionParser,
        ErrorKind::OnionArgument,
        ErrorKind::ParserNotImplemented,
        ErrorKind::Smuggler,
        ErrorKind::Installer,
    ];

    /// Type name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Davos => "DavosError",
            Self::Parser => "DavosParserError",
            Self::OnionParser => "OnionParserError",
            Self::OnionArgument => "OnionArgumentError",
            Self::ParserNotImplemented => "ParserNotImplementedError",
            Self::Smuggler => "SmugglerError",
            Self::Installer => "InstallerError",
        }
    }

    /// The family this kind belongs to; `None` for the root.
    pub const fn parent(self) -> Option<ErrorKind> {
        match self {
            Self::Davos => None,
            Self::Parser | Self::Smuggler => Some(Self::Davos),
            Self::OnionParser => Some(Self::Parser),
            Self::OnionArgument | Self::ParserNotImplemented => Some(Self::OnionParser),
            Self::Installer => Some(Self::Smuggler),
        }
    }

    /// This kind followed by each of its ancestors up to the root.
    pub fn ancestors(self) -> impl Iterator<Item = ErrorKind> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Whether `self` is `ancestor` or descends from it.
    pub fn is_a(self, ancestor: ErrorKind) -> bool {
        self.ancestors().any(|kind| kind == ancestor)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

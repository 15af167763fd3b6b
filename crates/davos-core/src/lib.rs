//! davos core library.
//!
//! Holds the error taxonomy shared by the onion parser and the installer,
//! plus the plumbing that produces installer errors (a captured-output shell
//! runner and the [`Installer`] wrapper) and the boundary [`report`] that
//! decides whether an error warns or aborts.

pub mod error;
pub mod installer;
pub mod paths;
pub mod reporter;
pub mod shell;

pub use error::{DavosError, ErrorKind};
pub use installer::Installer;
pub use paths::*;
pub use reporter::{Disposition, NullReporter, Reporter, TracingReporter, report};

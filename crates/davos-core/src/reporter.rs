//! Boundary reporting.
//!
//! Boundary handling for the error taxonomy: decide whether a failure is
//! worth aborting over, and say so through a [`Reporter`] without coupling
//! the core to a particular output.

use crate::error::{DavosError, ErrorKind};

/// What the boundary should do with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Report the error and carry on.
    Warn,
    /// Report the error and stop.
    Abort,
}

impl Disposition {
    /// Unsupported onion features are skipped with a warning; everything
    /// else aborts.
    pub fn for_error(err: &DavosError) -> Self {
        if err.as_not_implemented().is_some() {
            Self::Warn
        } else {
            Self::Abort
        }
    }
}

/// Sink for user-facing messages, so core logic is not tied to a terminal.
pub trait Reporter: Send + Sync {
    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);

    /// Log an error message.
    fn error(&self, msg: &str);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }
    fn warning(&self, msg: &str) {
        (**self).warning(msg);
    }
    fn error(&self, msg: &str) {
        (**self).error(msg);
    }
}

/// Forwards everything to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }
    fn warning(&self, msg: &str) {
        tracing::warn!("{msg}");
    }
    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}

/// A no-op reporter for silent operations (e.g., testing).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _: &str) {}
    fn warning(&self, _: &str) {}
    fn error(&self, _: &str) {}
}

/// Render `err` through `reporter` and return what the caller should do.
pub fn report<R: Reporter + ?Sized>(reporter: &R, err: &DavosError) -> Disposition {
    let disposition = Disposition::for_error(err);
    let msg = format!("{}: {err}", err.kind());
    match disposition {
        Disposition::Warn => reporter.warning(&format!("{msg}\n(skipped)")),
        Disposition::Abort => reporter.error(&msg),
    }
    if err.is(ErrorKind::Parser) {
        reporter.info("check the onion comment syntax on the line shown above");
    }
    disposition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{
        CalledProcessError, InstallerError, OnionArgumentError, ParserNotImplementedError,
        SmugglerError,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        lines: Mutex<Vec<(&'static str, String)>>,
    }

    impl Reporter for Recorder {
        fn info(&self, msg: &str) {
            self.lines.lock().unwrap().push(("info", msg.to_string()));
        }
        fn warning(&self, msg: &str) {
            self.lines.lock().unwrap().push(("warning", msg.to_string()));
        }
        fn error(&self, msg: &str) {
            self.lines.lock().unwrap().push(("error", msg.to_string()));
        }
    }

    #[test]
    fn not_implemented_warns() {
        let err: DavosError = ParserNotImplementedError::default().into();
        assert_eq!(Disposition::for_error(&err), Disposition::Warn);
    }

    #[test]
    fn everything_else_aborts() {
        let errors: Vec<DavosError> = vec![
            DavosError::msg("boom"),
            OnionArgumentError::new("# pip: -x").into(),
            SmugglerError::msg("bad spec").into(),
            InstallerError::new("failed", CalledProcessError::new(["pip"], Some(1))).into(),
        ];
        for err in &errors {
            assert_eq!(Disposition::for_error(err), Disposition::Abort, "{err}");
        }
    }

    #[test]
    fn report_routes_by_disposition() {
        let recorder = Arc::new(Recorder::default());

        let warn: DavosError = ParserNotImplementedError::default().into();
        assert_eq!(report(&recorder, &warn), Disposition::Warn);

        let abort: DavosError = SmugglerError::msg("bad spec").into();
        assert_eq!(report(&recorder, &abort), Disposition::Abort);

        let lines = recorder.lines.lock().unwrap();
        assert_eq!(lines[0].0, "warning");
        assert!(lines[0].1.starts_with("ParserNotImplementedError: "));
        assert_eq!(lines[1].0, "info");
        assert_eq!(lines[2], ("error", "SmugglerError: bad spec".to_string()));
    }

    #[test]
    fn null_reporter_still_decides() {
        let err: DavosError = SmugglerError::msg("bad spec").into();
        assert_eq!(report(&NullReporter, &err), Disposition::Abort);
    }
}

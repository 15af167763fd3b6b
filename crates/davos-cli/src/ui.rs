//! Terminal output.

use davos_core::Reporter;

/// Writes reporter messages to stderr with a severity prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, msg: &str) {
        eprintln!("note: {msg}");
    }
    fn warning(&self, msg: &str) {
        eprintln!("warning: {msg}");
    }
    fn error(&self, msg: &str) {
        eprintln!("error: {msg}");
    }
}

//! Install command

use davos_core::{DavosError, Disposition, Installer, Reporter, report};

/// Smuggle `specs` with `installer`, reporting any failure through `reporter`.
///
/// Returns `None` when nothing went wrong, otherwise what the boundary
/// decided to do with the failure.
pub fn install(
    installer: &Installer,
    specs: &[String],
    dry_run: bool,
    reporter: &dyn Reporter,
) -> Option<Disposition> {
    if dry_run {
        return match installer.command_for(specs) {
            Ok(argv) => {
                println!("Would run: {}", argv.join(" "));
                None
            }
            Err(err) => Some(report(reporter, &DavosError::from(err))),
        };
    }

    match installer.install(specs) {
        Ok(stdout) => {
            print!("{stdout}");
            reporter.info(&format!("Smuggled {}", specs.join(", ")));
            None
        }
        Err(err) => Some(report(reporter, &DavosError::from(err))),
    }
}

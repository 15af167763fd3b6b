//! Smuggling: install package specs by shelling out to an installer.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{InstallerError, SmugglerError};
use crate::shell::{ShellError, run_shell_command};

/// Distribution name at the start of a package spec.
static SPEC_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?").expect("valid spec regex")
});

/// Check that `spec` looks like an installable package spec
/// (`name`, `name==1.0`, `name[extra]>=2`, ...).
///
/// # Errors
///
/// Returns a [`SmugglerError::Message`] if the spec is empty, looks like a
/// flag, or does not start with a valid distribution name.
pub fn validate_spec(spec: &str) -> Result<(), SmugglerError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(SmugglerError::msg("empty package spec"));
    }
    if spec.starts_with('-') {
        return Err(SmugglerError::msg(format!(
            "invalid package spec '{spec}': looks like a flag"
        )));
    }
    if !SPEC_NAME.is_match(spec) {
        return Err(SmugglerError::msg(format!(
            "invalid package spec '{spec}': must start with a distribution name"
        )));
    }
    Ok(())
}

/// A package installer invoked as `<program...> install <specs...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installer {
    program: Vec<String>,
    show_stdout: Option<bool>,
}

impl Installer {
    /// An installer run through `program` (argv prefix, e.g. `["python", "-m", "pip"]`).
    pub fn new<I, S>(program: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into_iter().map(Into::into).collect(),
            show_stdout: None,
        }
    }

    /// The default installer: `pip`.
    pub fn pip() -> Self {
        Self::new(["pip"])
    }

    /// Override whether failures render captured stdout.
    pub fn with_show_stdout(mut self, show_stdout: Option<bool>) -> Self {
        self.show_stdout = show_stdout;
        self
    }

    /// The argv prefix used to invoke the installer.
    pub fn program(&self) -> &[String] {
        &self.program
    }

    /// The argv [`Installer::install`] would run for `specs`.
    ///
    /// # Errors
    ///
    /// Returns [`SmugglerError::Message`] if the installer has no program,
    /// since `install <specs>` alone would run whatever `install` is on PATH.
    pub fn command_for<S: AsRef<str>>(&self, specs: &[S]) -> Result<Vec<String>, SmugglerError> {
        if self.program.first().is_none_or(|p| p.trim().is_empty()) {
            return Err(SmugglerError::msg("no installer program configured"));
        }
        Ok(self
            .program
            .iter()
            .cloned()
            .chain(std::iter::once("install".to_string()))
            .chain(specs.iter().map(|spec| spec.as_ref().trim().to_string()))
            .collect())
    }

    /// Validate and install `specs`, returning the installer's stdout.
    ///
    /// # Errors
    ///
    /// Returns [`SmugglerError::Message`] if no specs are given, a spec is
    /// invalid, no installer program is configured, or the installer cannot
    /// be started, and
    /// [`SmugglerError::Installer`] if the installer exits unsuccessfully.
    pub fn install<S: AsRef<str>>(&self, specs: &[S]) -> Result<String, SmugglerError> {
        if specs.is_empty() {
            return Err(SmugglerError::msg("no packages to install"));
        }
        for spec in specs {
            validate_spec(spec.as_ref())?;
        }

        let argv = self.command_for(specs)?;
        let names: Vec<&str> = specs.iter().map(|spec| spec.as_ref().trim()).collect();
        tracing::info!("Smuggling {}", names.join(", "));

        match run_shell_command(&argv) {
            Ok(stdout) => Ok(stdout),
            Err(ShellError::Failed(process)) => {
                let mut err =
                    InstallerError::new(format!("failed to install {}", names.join(", ")), process);
                if let Some(show) = self.show_stdout {
                    err = err.show_stdout(show);
                }
                Err(err.into())
            }
            Err(other) => Err(SmugglerError::msg(other.to_string())),
        }
    }
}

impl Default for Installer {
    fn default() -> Self {
        Self::pip()
    }
}

//! Integration tests for the davos binary.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Test context that sets up a temporary davos home
struct TestContext {
    _temp_dir: TempDir,
    davos_home: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let davos_home = temp_dir.path().join(".davos");
        std::fs::create_dir_all(&davos_home).expect("failed to create davos home");
        Self {
            _temp_dir: temp_dir,
            davos_home,
        }
    }

    fn with_config(self, config: &str) -> Self {
        std::fs::write(self.davos_home.join("config.toml"), config)
            .expect("failed to write config");
        self
    }

    fn davos_cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_davos"));
        cmd.env("DAVOS_HOME", &self.davos_home);
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx
        .davos_cmd()
        .arg("--help")
        .output()
        .expect("failed to run davos");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("install"));
}

#[test]
fn test_kinds_lists_taxonomy() {
    let ctx = TestContext::new();
    let output = ctx
        .davos_cmd()
        .arg("kinds")
        .output()
        .expect("failed to run davos");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "DavosError",
        "DavosParserError",
        "OnionParserError",
        "OnionArgumentError",
        "ParserNotImplementedError",
        "SmugglerError",
        "InstallerError",
    ] {
        assert!(stdout.contains(name), "missing {name}");
    }
}

#[test]
fn test_dry_run_prints_command() {
    let ctx = TestContext::new().with_config(r#"installer = ["python", "-m", "pip"]"#);
    let output = ctx
        .davos_cmd()
        .args(["--dry-run", "install", "numpy==1.24"])
        .output()
        .expect("failed to run davos");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("python -m pip install numpy==1.24"));
}

#[test]
fn test_invalid_spec_fails() {
    let ctx = TestContext::new();
    let output = ctx
        .davos_cmd()
        .args(["install", "--", "--upgrade"])
        .output()
        .expect("failed to run davos");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SmugglerError"));
    assert!(stderr.contains("looks like a flag"));
}

#[test]
fn test_blank_installer_flag_rejected() {
    let ctx = TestContext::new();
    for flag in ["", "   "] {
        let output = ctx
            .davos_cmd()
            .args(["--dry-run", "install", "--installer", flag, "numpy"])
            .output()
            .expect("failed to run davos");
        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("Would run"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--installer must name a program"));
    }
}

#[test]
fn test_empty_config_installer_rejected() {
    let ctx = TestContext::new().with_config("installer = []");
    let output = ctx
        .davos_cmd()
        .args(["install", "numpy"])
        .output()
        .expect("failed to run davos");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("install numpy"));
}

#[test]
fn test_malformed_config_fails() {
    let ctx = TestContext::new().with_config("installer = ");
    let output = ctx
        .davos_cmd()
        .args(["install", "numpy"])
        .output()
        .expect("failed to run davos");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config.toml"));
}

#[cfg(unix)]
#[test]
fn test_failing_installer_reports_stderr() {
    let ctx = TestContext::new().with_config(
        r#"installer = ["sh", "-c", "echo fetched-$((6*7)); echo no-match-$((2+3)) >&2; exit 1", "sh"]"#,
    );
    let output = ctx
        .davos_cmd()
        .args(["install", "numpy==0.0.0"])
        .output()
        .expect("failed to run davos");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InstallerError: failed to install numpy==0.0.0"));
    assert!(stderr.contains("returned non-zero exit status 1"));
    assert!(stderr.contains("Captured stderr:\nno-match-5"));
    assert!(!stderr.contains("fetched-42"));
}

#[cfg(unix)]
#[test]
fn test_show_stdout_flag_overrides_config() {
    let ctx = TestContext::new().with_config(
        r#"
        installer = ["sh", "-c", "echo fetched-$((6*7)); echo oops-$((2+3)) >&2; exit 2", "sh"]
        show_stdout = false
        "#,
    );
    let output = ctx
        .davos_cmd()
        .args(["install", "--show-stdout", "numpy"])
        .output()
        .expect("failed to run davos");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Captured stdout:\nfetched-42"));
    assert!(stderr.contains("Captured stderr:\noops-5"));
}

#[cfg(unix)]
#[test]
fn test_successful_install() {
    let ctx = TestContext::new().with_config(r#"installer = ["sh", "-c", "echo ok \"$@\"", "sh"]"#);
    let output = ctx
        .davos_cmd()
        .args(["install", "numpy"])
        .output()
        .expect("failed to run davos");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ok install numpy"));
}

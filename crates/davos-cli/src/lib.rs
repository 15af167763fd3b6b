//! davos - smuggle packages into the running environment
#![allow(clippy::missing_errors_doc)]
//!
//! Command-line front end for `davos-core`: installs package specs through a
//! configurable installer and reports failures through the error taxonomy.
//!
//! # Directory Layout
//!
//! ```text
//! ~/.davos/
//! └── config.toml   # installer and output settings
//! ```

pub mod cmd;
pub mod config;
pub mod ui;

pub use config::Config;

use clap::{Parser, Subcommand};

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(name = "davos")]
#[command(author, version, about = "davos - smuggle packages into the running environment")]
pub struct Cli {
    /// Show what would happen without making changes
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Send messages to the log instead of the terminal
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install package specs with the configured installer
    Install {
        /// Package spec(s): name, name==1.0, name[extra]>=2
        #[arg(required = true)]
        specs: Vec<String>,
        /// Installer command, split on whitespace (e.g. "python -m pip")
        #[arg(long)]
        installer: Option<String>,
        /// Always include installer stdout in failure reports
        #[arg(long, conflicts_with = "hide_stdout")]
        show_stdout: bool,
        /// Never include installer stdout in failure reports
        #[arg(long)]
        hide_stdout: bool,
    },
    /// Print the error taxonomy
    Kinds,
}

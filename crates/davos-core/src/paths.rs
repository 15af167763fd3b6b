//! Filesystem locations under the davos home directory.

use dirs::home_dir;
use std::path::PathBuf;

/// Returns the davos home directory, or None if the user's home cannot be resolved.
pub fn try_davos_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var("DAVOS_HOME") {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".davos"))
}

/// Config file path: ~/.davos/config.toml
pub fn config_path() -> Option<PathBuf> {
    try_davos_home().map(|h| h.join("config.toml"))
}

pub mod build;
pub mod dev;
pub mod init;
pub mod links;
pub mod serve;

use std::path::{Path, PathBuf};

/// Directory that relative paths in the config file resolve against.
pub fn config_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

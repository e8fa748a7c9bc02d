//! Path utilities: expand `~`, resolve output locations.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Output file: explicit `file` if given, otherwise `fallback` inside `dir`.
pub fn output_path(file: Option<&str>, dir: &str, fallback: impl FnOnce(&Path) -> PathBuf) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => fallback(&expand_tilde(dir)),
    }
}

//! Config path resolution.
//!
//! The config value comes from `LED_CONFIG` (or `--config`), looked up once
//! in `main` and passed in here explicitly. Absolute paths are used as-is;
//! relative paths resolve against the project root, never the current
//! working directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::PrebuildError;

/// Resolve an optional config value to a validated path.
///
/// No side effects: on success the config file exists and nothing has been
/// written or spawned.
pub fn resolve_config(
    value: Option<&str>,
    project_root: &Path,
) -> Result<PathBuf, PrebuildError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            return Err(PrebuildError::ConfigNotSpecified {
                candidates: list_candidates(project_root),
            })
        }
    };

    let path = Path::new(value);
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    };

    if !resolved.is_file() {
        return Err(PrebuildError::ConfigNotFound { path: resolved });
    }

    Ok(resolved)
}

/// List `*.json` files directly under `<root>/config/`, sorted by name,
/// as paths relative to the project root. Empty if the directory is absent.
pub fn list_candidates(project_root: &Path) -> Vec<PathBuf> {
    let config_dir = project_root.join("config");
    if !config_dir.is_dir() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(&config_dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .flatten()
    {
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .map(|e| e == "json")
                .unwrap_or(false)
        {
            let rel = entry
                .path()
                .strip_prefix(project_root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| entry.path().to_path_buf());
            candidates.push(rel);
        }
    }
    candidates
}

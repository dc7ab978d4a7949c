//! Header persistence.
//!
//! The destination is fully overwritten with the generator's stdout,
//! byte-for-byte. Direct overwrite, not temp-file + rename: a partial write
//! on interruption is an accepted risk of the current contract.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `contents` to `dest`, creating missing parent directories.
pub fn write_header(dest: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(dest, contents)
        .with_context(|| format!("Failed to write header: {}", dest.display()))
}

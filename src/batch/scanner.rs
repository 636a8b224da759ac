//! Flat folder listing

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Extension of the only texture format handled
pub const TEXTURE_EXTENSION: &str = "png";

/// List PNG files directly inside `folder`, in directory order.
/// Subdirectories are not entered.
pub fn list_textures(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder)
        .with_context(|| format!("Failed to read folder {}", folder.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", folder.display()))?;
        let path = entry.path();
        if path.is_file() && crate::paths::has_extension(&path, TEXTURE_EXTENSION) {
            files.push(path);
        }
    }

    Ok(files)
}

//! Removal of generated LOD files

use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use super::scanner::list_textures;
use super::{StatusSink, NO_FILES_FOUND};
use crate::lod::{LodTag, MAX_LOD_LEVELS};
use crate::paths;

/// Result of a deletion sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeleteSummary {
    pub files_scanned: usize,
    pub removed: usize,
    pub failed: usize,
}

/// Check whether a stem carries any of `_LOD1`..`_LOD9`, ignoring case
pub fn is_generated_lod(stem: &str) -> bool {
    LodTag::first(MAX_LOD_LEVELS).any(|tag| paths::contains_ignore_case(stem, &tag.suffix()))
}

/// Delete every PNG in `folder` whose stem carries a LOD tag.
///
/// A file that cannot be removed is reported and the sweep continues.
pub fn delete_lods_in_folder(folder: &Path, sink: &mut dyn StatusSink) -> DeleteSummary {
    let summary = sweep(folder, sink);
    sink.complete();
    summary
}

fn sweep(folder: &Path, sink: &mut dyn StatusSink) -> DeleteSummary {
    let mut summary = DeleteSummary::default();

    let files = match list_textures(folder) {
        Ok(files) => files,
        Err(e) => {
            sink.status(format!("Error reading {}: {:#}", folder.display(), e));
            return summary;
        }
    };
    if files.is_empty() {
        sink.status(NO_FILES_FOUND.to_string());
        return summary;
    }

    summary.files_scanned = files.len();
    sink.status(format!("Looking for generated LODs in {}...", folder.display()));

    for file in files.iter().filter(|f| is_generated_lod(&paths::stem(f))) {
        let name = paths::file_name(file);
        match std::fs::remove_file(file) {
            Ok(()) => {
                summary.removed += 1;
                sink.status(format!("Removed: {}", name));
            }
            Err(e) => {
                warn!("Failed to remove {}: {}", file.display(), e);
                summary.failed += 1;
                sink.status(format!("Failed to remove {}: {}", name, e));
            }
        }
    }

    if summary.removed == 0 {
        sink.status("No LODs found to remove.".to_string());
    } else {
        sink.status(format!("Total removed: {}", summary.removed));
    }
    info!(
        "Deletion sweep in {}: {} removed, {} failed",
        folder.display(),
        summary.removed,
        summary.failed
    );

    summary
}

//! Folder-level LOD generation and cleanup
//!
//! Both operations list the PNG files directly inside one folder, emit
//! status lines as they go and call [`StatusSink::complete`] exactly once
//! at the end, whatever happened to individual files.

mod delete;
mod scanner;
mod status;

pub use delete::{delete_lods_in_folder, is_generated_lod, DeleteSummary};
pub use scanner::{list_textures, TEXTURE_EXTENSION};
pub use status::{StatusLog, StatusSink};

#[cfg(test)]
pub(crate) use status::HookedLog;

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::lod::LodPlan;
use crate::paths;
use crate::textures::generate_lods;

/// Reported when the folder holds no PNG files
pub const NO_FILES_FOUND: &str = "No PNG files found.";

/// Final line of a generation run
pub const FINISHED_MESSAGE: &str = "#### Finished! May the Force be with you :)";

/// Result of a generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub files_found: usize,
    pub excluded: usize,
    pub processed: usize,
    pub failed: usize,
    pub lods_created: usize,
    pub lods_skipped: usize,
}

/// Generate LODs for every eligible PNG in `folder`.
pub fn process_folder(folder: &Path, plan: &LodPlan, sink: &mut dyn StatusSink) -> BatchSummary {
    let summary = run(folder, plan, sink);
    sink.complete();
    summary
}

fn run(folder: &Path, plan: &LodPlan, sink: &mut dyn StatusSink) -> BatchSummary {
    let mut summary = BatchSummary::default();

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

    summary.files_found = files.len();
    sink.status(format!(
        "Processing {} PNG files ({} LODs: {})...",
        files.len(),
        plan.levels().len(),
        plan.describe_sizes()
    ));
    sink.status(if plan.filter().includes_normals() {
        "Including normal maps.".to_string()
    } else {
        "Skipping normal maps.".to_string()
    });

    for (idx, file) in files.iter().enumerate() {
        let index = idx + 1;
        let name = paths::file_name(file);

        if let Some(reason) = plan.filter().check(&paths::stem(file)) {
            debug!("Excluding {}: {:?}", name, reason);
            summary.excluded += 1;
            sink.status(format!("[{}] Skipped (excluded): {}", index, name));
            continue;
        }

        sink.status(format!("[{}] Processing: {}", index, name));
        let counts = generate_lods(file, plan.levels(), sink);
        summary.processed += 1;
        summary.lods_created += counts.created;
        summary.lods_skipped += counts.skipped;
        if counts.failed {
            summary.failed += 1;
        }
    }

    info!(
        "Batch in {}: {} processed, {} excluded, {} failed, {} LODs created",
        folder.display(),
        summary.processed,
        summary.excluded,
        summary.failed,
        summary.lods_created
    );
    sink.status(FINISHED_MESSAGE.to_string());

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lod::LodSize;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(path: &Path, size: u32) {
        RgbaImage::from_pixel(size, size, Rgba([10, 20, 30, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_mixed_folder() {
        let dir = TempDir::new().unwrap();
        write_png(&dir.path().join("rock_color.png"), 1024);
        write_png(&dir.path().join("rock_NORM.png"), 64);
        write_png(&dir.path().join("rock_color_LOD1.png"), 512);

        let plan = LodPlan::configurable(vec![LodSize::square(512), LodSize::square(128)], false);
        let mut log = StatusLog::new();
        let summary = process_folder(dir.path(), &plan, &mut log);

        assert_eq!(
            summary,
            BatchSummary {
                files_found: 3,
                excluded: 2,
                processed: 1,
                failed: 0,
                lods_created: 1,
                lods_skipped: 1,
            }
        );
        assert_eq!(
            image::image_dimensions(dir.path().join("rock_color_LOD2.png")).unwrap(),
            (128, 128)
        );
        assert!(!dir.path().join("rock_NORM_LOD1.png").exists());
        assert!(!dir.path().join("rock_color_LOD1_LOD1.png").exists());

        assert_eq!(log.lines[0], "Processing 3 PNG files (2 LODs: 512x512, 128x128)...");
        assert_eq!(log.lines[1], "Skipping normal maps.");
        assert!(log.contains("LOD1 skipped (already exists): rock_color_LOD1.png"));
        assert!(log.contains("LOD2 created: rock_color_LOD2.png (128x128)"));
        assert!(log.contains("Skipped (excluded): rock_NORM.png"));
        assert!(log.contains("Skipped (excluded): rock_color_LOD1.png"));
        assert_eq!(log.lines.last().unwrap(), FINISHED_MESSAGE);
        assert_eq!(log.completions, 1);
    }

    #[test]
    fn test_empty_folder() {
        let dir = TempDir::new().unwrap();
        let mut log = StatusLog::new();
        let summary = process_folder(dir.path(), &LodPlan::fixed(), &mut log);

        assert_eq!(summary, BatchSummary::default());
        assert_eq!(log.lines, vec![NO_FILES_FOUND.to_string()]);
        assert_eq!(log.completions, 1);
    }

    #[test]
    fn test_failed_file_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"garbage").unwrap();
        write_png(&dir.path().join("good.png"), 64);

        let plan = LodPlan::configurable(vec![LodSize::square(32)], true);
        let mut log = StatusLog::new();
        let summary = process_folder(dir.path(), &plan, &mut log);

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.lods_created, 1);
        assert!(dir.path().join("good_LOD1.png").exists());
        assert!(log.contains("Error processing broken.png"));
        assert_eq!(log.lines.last().unwrap(), FINISHED_MESSAGE);
        assert_eq!(log.completions, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_failure_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        // Source name fits NAME_MAX, its `_LOD1` sibling does not
        let long_stem = "a".repeat(250);
        write_png(&dir.path().join(format!("{}.png", long_stem)), 32);
        write_png(&dir.path().join("good.png"), 32);

        let plan = LodPlan::configurable(vec![LodSize::square(16)], true);
        let mut log = StatusLog::new();
        let summary = process_folder(dir.path(), &plan, &mut log);

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.lods_created, 1);
        assert!(log.contains(&format!("Error processing {}.png: Failed to write ", long_stem)));
        assert!(log.contains("LOD1 created: good_LOD1.png (16x16)"));
        assert_eq!(
            image::image_dimensions(dir.path().join("good_LOD1.png")).unwrap(),
            (16, 16)
        );
        assert_eq!(log.lines.last().unwrap(), FINISHED_MESSAGE);
        assert_eq!(log.completions, 1);
    }

    #[test]
    fn test_fixed_plan_sizes() {
        let dir = TempDir::new().unwrap();
        write_png(&dir.path().join("stone.png"), 256);
        write_png(&dir.path().join("stone_NRM.png"), 256);

        let mut log = StatusLog::new();
        let summary = process_folder(dir.path(), &LodPlan::fixed(), &mut log);

        assert_eq!(summary.lods_created, 4);
        assert_eq!(summary.excluded, 1);
        for (tag, size) in [("_LOD1", 1024), ("_LOD2", 256), ("_LOD3", 64), ("_LOD4", 16)] {
            let path = dir.path().join(format!("stone{}.png", tag));
            assert_eq!(image::image_dimensions(path).unwrap(), (size, size));
        }
    }

    #[test]
    fn test_missing_folder_still_completes() {
        let dir = TempDir::new().unwrap();
        let mut log = StatusLog::new();
        process_folder(&dir.path().join("gone"), &LodPlan::fixed(), &mut log);

        assert_eq!(log.lines.len(), 1);
        assert!(log.lines[0].starts_with("Error reading"));
        assert_eq!(log.completions, 1);
    }
}

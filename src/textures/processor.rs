//! LOD generation for a single source texture
//!
//! Every level is resized from the full-resolution source, never from the
//! previous level. Existing targets are left untouched, so re-running a
//! folder only fills in what is missing.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::batch::StatusSink;
use crate::lod::{LodLevel, LodSize, LodTag};
use crate::paths;

/// Resampling filter used for every level
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Outcome of one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelOutcome {
    /// Target written at the requested size
    Created { tag: LodTag, path: PathBuf, size: LodSize },
    /// Target already existed and was not touched
    Skipped { tag: LodTag, path: PathBuf },
}

impl LevelOutcome {
    /// Status line for this outcome
    pub fn describe(&self) -> String {
        match self {
            LevelOutcome::Created { tag, path, size } => {
                format!("{} created: {} ({})", tag.label(), paths::file_name(path), size)
            }
            LevelOutcome::Skipped { tag, path } => {
                format!("{} skipped (already exists): {}", tag.label(), paths::file_name(path))
            }
        }
    }
}

/// Per-source tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LodCounts {
    pub created: usize,
    pub skipped: usize,
    /// The source could not be fully processed
    pub failed: bool,
}

/// Path of the LOD output for `source` at `tag`
pub fn lod_target_path(source: &Path, tag: LodTag) -> PathBuf {
    paths::tagged_sibling(source, &tag.suffix())
}

/// Open a texture and normalize it to RGBA8
pub fn load_rgba(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(DynamicImage::ImageRgba8(image.into_rgba8()))
}

/// Resize the full image to one level's size
pub fn resize_to(source: &DynamicImage, size: LodSize) -> RgbaImage {
    debug!(
        "Resizing {}x{} -> {}",
        source.width(),
        source.height(),
        size
    );
    source
        .resize_exact(size.width, size.height, RESIZE_FILTER)
        .into_rgba8()
}

/// Generate every level of `levels` for `source`, reporting each outcome.
///
/// Errors are reported with the source file name and stop the remaining
/// levels of this source only; the caller keeps going with other files.
pub fn generate_lods(source: &Path, levels: &[LodLevel], sink: &mut dyn StatusSink) -> LodCounts {
    let mut counts = LodCounts::default();

    let result = try_generate_lods(source, levels, |outcome| {
        match outcome {
            LevelOutcome::Created { .. } => counts.created += 1,
            LevelOutcome::Skipped { .. } => counts.skipped += 1,
        }
        sink.status(outcome.describe());
    });

    if let Err(e) = result {
        warn!("LOD generation failed for {}: {:#}", source.display(), e);
        sink.status(format!(
            "Error processing {}: {:#}",
            paths::file_name(source),
            e
        ));
        counts.failed = true;
    }

    counts
}

fn try_generate_lods<F>(source: &Path, levels: &[LodLevel], mut on_outcome: F) -> Result<()>
where
    F: FnMut(LevelOutcome),
{
    let image = load_rgba(source)?;

    for level in levels {
        let target = lod_target_path(source, level.tag);
        if target.exists() {
            on_outcome(LevelOutcome::Skipped {
                tag: level.tag,
                path: target,
            });
            continue;
        }

        let resized = resize_to(&image, level.size);
        resized
            .save(&target)
            .with_context(|| format!("Failed to write {}", target.display()))?;

        on_outcome(LevelOutcome::Created {
            tag: level.tag,
            path: target,
            size: level.size,
        });
    }

    Ok(())
}

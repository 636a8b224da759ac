//! LOD levels, sizes and run plans
//!
//! A level pairs an ordinal (1..=9) with a square target size. The ordinal
//! decides the filename tag, so level 3 is always written as `_LOD3`.

mod validate;

pub use validate::{validate_lod_sizes, ValidationError};

use std::fmt;

use crate::textures::ExclusionFilter;

/// Highest LOD ordinal
pub const MAX_LOD_LEVELS: usize = 9;

/// Square sizes a level may be resized to
pub const ALLOWED_SIZES: [u32; 9] = [16, 32, 64, 128, 256, 512, 1024, 2048, 4096];

/// Default size selection per level (level 1 first)
pub const DEFAULT_LOD_SIZES: [u32; MAX_LOD_LEVELS] = [4096, 2048, 1024, 512, 256, 128, 64, 32, 16];

/// Number of levels requested when nothing else is specified
pub const DEFAULT_LOD_COUNT: usize = 4;

/// Sizes of the fixed four-level preset
pub const FIXED_LOD_SIZES: [u32; 4] = [1024, 256, 64, 16];

/// Check whether a size belongs to the allowed set
pub fn is_allowed_size(size: u32) -> bool {
    ALLOWED_SIZES.contains(&size)
}

/// Filename tag of a LOD ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LodTag(u8);

impl LodTag {
    /// Create a tag for ordinal 1..=9
    pub fn new(ordinal: usize) -> Option<Self> {
        if (1..=MAX_LOD_LEVELS).contains(&ordinal) {
            Some(Self(ordinal as u8))
        } else {
            None
        }
    }

    /// Tags `_LOD1` through `_LOD<count>`
    pub fn first(count: usize) -> impl Iterator<Item = LodTag> {
        (1..=count.min(MAX_LOD_LEVELS)).map(|n| LodTag(n as u8))
    }

    /// Suffix inserted before the extension (`_LOD1`)
    pub fn suffix(self) -> String {
        format!("_LOD{}", self.0)
    }

    /// Name used in status lines (`LOD1`)
    pub fn label(self) -> String {
        format!("LOD{}", self.0)
    }
}

impl fmt::Display for LodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_LOD{}", self.0)
    }
}

/// Target dimensions of one LOD output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LodSize {
    pub width: u32,
    pub height: u32,
}

impl LodSize {
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

impl fmt::Display for LodSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One entry of a size list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LodLevel {
    pub tag: LodTag,
    pub size: LodSize,
}

/// Everything a generation run needs: ordered levels plus the source filter
#[derive(Debug, Clone)]
pub struct LodPlan {
    levels: Vec<LodLevel>,
    filter: ExclusionFilter,
}

impl LodPlan {
    /// User-selected sizes. Levels beyond the ninth are dropped.
    pub fn configurable(sizes: Vec<LodSize>, include_normals: bool) -> Self {
        Self {
            levels: Self::levels_from(sizes),
            filter: ExclusionFilter::configurable(include_normals),
        }
    }

    /// Four hardcoded levels, normal maps always skipped
    pub fn fixed() -> Self {
        let sizes = FIXED_LOD_SIZES.iter().map(|&s| LodSize::square(s)).collect();
        Self {
            levels: Self::levels_from(sizes),
            filter: ExclusionFilter::fixed(),
        }
    }

    fn levels_from(sizes: Vec<LodSize>) -> Vec<LodLevel> {
        LodTag::first(sizes.len())
            .zip(sizes)
            .map(|(tag, size)| LodLevel { tag, size })
            .collect()
    }

    pub fn levels(&self) -> &[LodLevel] {
        &self.levels
    }

    pub fn filter(&self) -> &ExclusionFilter {
        &self.filter
    }

    /// `"512x512, 128x128"`
    pub fn describe_sizes(&self) -> String {
        self.levels
            .iter()
            .map(|l| l.size.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for LodPlan {
    fn default() -> Self {
        Self::fixed()
    }
}

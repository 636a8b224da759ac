//! Source selection for LOD generation
//!
//! Matching is plain substring matching on the file stem, so a texture
//! named `normandy.png` counts as a normal map under the `norm` rule.

use crate::lod::{LodTag, MAX_LOD_LEVELS};
use crate::paths::contains_ignore_case;

/// Normal-map markers of the fixed preset (case-sensitive)
pub const NORMAL_MAP_MARKERS: &[&str] = &["_NRM", "_NML", "_NORMAL"];

/// Marker used by the configurable preset (case-insensitive)
pub const NORMAL_MAP_SUBSTRING: &str = "norm";

/// How normal maps are recognized, if at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalMapRule {
    /// Normal maps are valid sources
    Include,
    /// Skip stems containing the substring, ignoring case
    SkipContaining(&'static str),
    /// Skip stems containing any marker, case-sensitive
    SkipMarkers(&'static [&'static str]),
}

/// Why a file is not used as a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Stem carries a LOD tag, i.e. it is a generated output
    LodOutput(LodTag),
    /// Stem looks like a normal map
    NormalMap,
}

/// Decides which textures are LOD sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionFilter {
    lod_tags: Vec<String>,
    normals: NormalMapRule,
}

impl ExclusionFilter {
    /// Any of `_LOD1`..`_LOD9` excludes; `norm` excludes unless normals are included
    pub fn configurable(include_normals: bool) -> Self {
        let normals = if include_normals {
            NormalMapRule::Include
        } else {
            NormalMapRule::SkipContaining(NORMAL_MAP_SUBSTRING)
        };
        Self::new(MAX_LOD_LEVELS, normals)
    }

    /// `_LOD1`..`_LOD4` and the fixed normal-map markers exclude
    pub fn fixed() -> Self {
        Self::new(4, NormalMapRule::SkipMarkers(NORMAL_MAP_MARKERS))
    }

    fn new(tag_count: usize, normals: NormalMapRule) -> Self {
        Self {
            lod_tags: LodTag::first(tag_count).map(LodTag::suffix).collect(),
            normals,
        }
    }

    pub fn includes_normals(&self) -> bool {
        self.normals == NormalMapRule::Include
    }

    /// Reason the stem is excluded, or `None` for a valid source
    pub fn check(&self, stem: &str) -> Option<ExclusionReason> {
        let is_normal = match self.normals {
            NormalMapRule::Include => false,
            NormalMapRule::SkipContaining(marker) => contains_ignore_case(stem, marker),
            NormalMapRule::SkipMarkers(markers) => markers.iter().any(|m| stem.contains(m)),
        };
        if is_normal {
            return Some(ExclusionReason::NormalMap);
        }

        self.lod_tags
            .iter()
            .position(|tag| contains_ignore_case(stem, tag))
            .and_then(|idx| LodTag::new(idx + 1))
            .map(ExclusionReason::LodOutput)
    }
}

//! Texture processing
//!
//! Source selection and LOD resizing for PNG textures, built on the
//! `image` crate with Lanczos3 resampling.

mod filter;
mod processor;

pub use filter::{ExclusionFilter, ExclusionReason};
pub use processor::{
    generate_lods, load_rgba, lod_target_path, resize_to, LevelOutcome, LodCounts, RESIZE_FILTER,
};

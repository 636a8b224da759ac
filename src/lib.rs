//! lodgen - batch LOD texture generator
//!
//! Writes reduced-resolution `_LOD<n>` copies next to every PNG in a
//! folder, and removes them again on request.

pub mod batch;
pub mod config;
pub mod lod;
pub mod paths;
pub mod textures;
pub mod worker;

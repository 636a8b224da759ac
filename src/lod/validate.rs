//! Validation of user-selected LOD sizes
//!
//! Runs before any work starts; a failure never reaches the worker.

use super::{is_allowed_size, LodSize, LodTag, ALLOWED_SIZES, DEFAULT_LOD_SIZES, MAX_LOD_LEVELS};

/// Size list validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("LOD count must be between 1 and {max}, got {0}", max = MAX_LOD_LEVELS)]
    LodCount(usize),

    #[error("Invalid value for {level}: choose one of the allowed sizes")]
    InvalidSize { level: String },

    #[error("{level} must be one of these values: {allowed:?}, got {value}", allowed = ALLOWED_SIZES)]
    SizeNotAllowed { level: String, value: i64 },

    #[error("LOD sizes must be in decreasing order (e.g. 4096 >= 2048 >= 1024 ...)")]
    NotDescending,
}

/// Turn `count` size selections into an ordered list of square sizes.
///
/// Selections are read in level order; a level without a selection uses
/// its default from [`DEFAULT_LOD_SIZES`]. Extra selections past `count`
/// are ignored.
pub fn validate_lod_sizes<S: AsRef<str>>(
    count: usize,
    selections: &[S],
) -> Result<Vec<LodSize>, ValidationError> {
    if !(1..=MAX_LOD_LEVELS).contains(&count) {
        return Err(ValidationError::LodCount(count));
    }

    let mut sizes = Vec::with_capacity(count);
    for (idx, tag) in LodTag::first(count).enumerate() {
        let value = match selections.get(idx) {
            Some(raw) => raw
                .as_ref()
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidSize { level: tag.label() })?,
            None => i64::from(DEFAULT_LOD_SIZES[idx]),
        };

        // Any integer parses; only members of the allowed set get through
        let size = u32::try_from(value)
            .ok()
            .filter(|&s| is_allowed_size(s))
            .ok_or_else(|| ValidationError::SizeNotAllowed {
                level: tag.label(),
                value,
            })?;
        sizes.push(LodSize::square(size));
    }

    let descending = sizes
        .windows(2)
        .all(|w| w[1].width <= w[0].width && w[1].height <= w[0].height);
    if !descending {
        return Err(ValidationError::NotDescending);
    }

    Ok(sizes)
}

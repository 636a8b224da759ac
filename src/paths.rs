//! Texture file naming helpers
//!
//! Generated LODs live next to their source as `<stem><tag><suffix>`:
//! `rock_color.png` -> `rock_color_LOD2.png`.

use std::path::{Path, PathBuf};

/// File stem as a lossy string (`rock_color.png` -> `rock_color`)
pub fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Extension including the leading dot (`.png`), or empty
pub fn suffix(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// File name for status lines
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Build the sibling path for a tagged copy of `source`
/// `textures/rock.png` + `_LOD1` -> `textures/rock_LOD1.png`
pub fn tagged_sibling(source: &Path, tag: &str) -> PathBuf {
    let name = format!("{}{}{}", stem(source), tag, suffix(source));
    source.with_file_name(name)
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Check if the path has the given extension (case-insensitive, no dot)
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_and_suffix() {
        let path = Path::new("/tmp/textures/rock_color.png");
        assert_eq!(stem(path), "rock_color");
        assert_eq!(suffix(path), ".png");
        assert_eq!(file_name(path), "rock_color.png");
    }

    #[test]
    fn test_suffix_without_extension() {
        assert_eq!(suffix(Path::new("README")), "");
    }

    #[test]
    fn test_tagged_sibling() {
        let path = Path::new("/tmp/textures/rock_color.png");
        assert_eq!(
            tagged_sibling(path, "_LOD2"),
            PathBuf::from("/tmp/textures/rock_color_LOD2.png")
        );
    }

    #[test]
    fn test_tagged_sibling_keeps_suffix_case() {
        let path = Path::new("wall.PNG");
        assert_eq!(tagged_sibling(path, "_LOD1"), PathBuf::from("wall_LOD1.PNG"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("rock_lod1", "_LOD1"));
        assert!(contains_ignore_case("Rock_NORM", "norm"));
        assert!(!contains_ignore_case("rock_color", "norm"));
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("a.png"), "png"));
        assert!(has_extension(Path::new("a.PNG"), "png"));
        assert!(!has_extension(Path::new("a.dds"), "png"));
        assert!(!has_extension(Path::new("png"), "png"));
    }
}

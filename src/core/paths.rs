//! Path normalization utilities
//!
//! Ensures all paths are normalized to use '/' as separator and are relative to root.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("docs/a.txt");
        assert_eq!(normalize_path(path), "docs/a.txt");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/corpus");
        let path = Path::new("/corpus/a.txt");
        assert_eq!(make_relative(path, root), Some("a.txt".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/corpus");
        let path = Path::new("/other/a.txt");
        assert_eq!(make_relative(path, root), None);
    }
}

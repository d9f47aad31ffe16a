//! Paths left out of a generated project.
//! Version control, editor and OS metadata, build output and nested template
//! directories are skipped together with everything below them.

use crate::constants::EXCLUDED_PATTERNS;
use std::path::Path;

/// Returns true if the path, relative to the template root, contains one of
/// the [`EXCLUDED_PATTERNS`].
///
/// The template root itself (an empty relative path) is never excluded.
///
/// # Example
/// ```
/// use gouno::ignore::is_excluded;
///
/// assert!(is_excluded(".git/config"));
/// assert!(is_excluded("cmd/bin/tool"));
/// assert!(!is_excluded("cmd/main.go"));
/// ```
pub fn is_excluded<P: AsRef<Path>>(relative_path: P) -> bool {
    let relative_path = relative_path.as_ref().to_string_lossy();
    if relative_path.is_empty() {
        return false;
    }
    EXCLUDED_PATTERNS.iter().any(|pattern| relative_path.contains(pattern))
}

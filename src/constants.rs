//! Common constants used throughout gouno.

/// Path substrings that are never copied into a generated project.
///
/// Matching is a plain substring test on the path relative to the template
/// root, so `bin` also matches `cabinet.go`.
pub const EXCLUDED_PATTERNS: [&str; 5] = [".git", ".idea", ".DS_Store", "bin", "templates"];

/// Repository cloned when no template is given on the command line
pub const DEFAULT_TEMPLATE_REPO: &str = "https://github.com/rushairer/gouno-template";

/// Prefix of the temporary directory a git template is cloned into
pub const TEMP_DIR_PREFIX: &str = "gouno-template-";

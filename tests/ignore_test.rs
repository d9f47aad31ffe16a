use gouno::ignore::is_excluded;
use std::path::Path;

#[test]
fn test_metadata_is_excluded() {
    assert!(is_excluded(".git"));
    assert!(is_excluded(".git/config"));
    assert!(is_excluded(".gitignore"));
    assert!(is_excluded(".idea/workspace.xml"));
    assert!(is_excluded("assets/.DS_Store"));
}

#[test]
fn test_build_and_template_dirs_are_excluded() {
    assert!(is_excluded("bin"));
    assert!(is_excluded("bin/server"));
    assert!(is_excluded("web/templates/index.html"));
}

#[test]
fn test_substring_match() {
    // plain substring test, not path components
    assert!(is_excluded("internal/cabinet.go"));
}

#[test]
fn test_regular_paths_are_kept() {
    assert!(!is_excluded("go.mod"));
    assert!(!is_excluded("cmd/server/main.go"));
    assert!(!is_excluded("logo.png"));
}

#[test]
fn test_root_is_never_excluded() {
    assert!(!is_excluded(Path::new("")));
}

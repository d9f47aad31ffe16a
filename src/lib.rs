//! gouno scaffolds new projects from a template directory.
//! A template is a plain directory tree (local or cloned from git) whose
//! files may reference the module path, project name and repository URL.

/// Command-line interface module for gouno
pub mod cli;

/// Common constants: exclusion set and default template repository
pub mod constants;

/// Module path, project name and repository URL given to templates
pub mod context;

/// Error types and handling for gouno
pub mod error;

/// Paths that are never copied into a generated project
pub mod ignore;

/// Resolving a template argument to a local directory
pub mod loader;

/// Logger setup
pub mod logger;

/// Template tree walking and copying
pub mod processor;

/// Template detection and rendering
pub mod renderer;

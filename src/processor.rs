//! Copies a template tree into a new project.
//! Every regular file is rendered with the template context, or copied byte
//! for byte when it is not a template.

use crate::{
    context::TemplateContext,
    error::{Error, Result},
    ignore::is_excluded,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filesystem change derived from a single template entry.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Create a directory (and missing parents) with the given unix mode
    CreateDir { target: PathBuf, mode: u32 },
    /// Write rendered template output
    Write { target: PathBuf, content: String },
    /// Write the original bytes unchanged
    Copy { target: PathBuf, content: Vec<u8> },
}

impl FileOperation {
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::CreateDir { target, .. }
            | FileOperation::Write { target, .. }
            | FileOperation::Copy { target, .. } => target,
        }
    }

    /// Performs the operation. Existing files are truncated.
    pub fn apply(&self) -> Result<()> {
        match self {
            FileOperation::CreateDir { target, mode } => create_dir_all(target, *mode),
            FileOperation::Write { target, content } => {
                fs::write(target, content).map_err(|e| Error::at_path(target, e))
            }
            FileOperation::Copy { target, content } => {
                fs::write(target, content).map_err(|e| Error::at_path(target, e))
            }
        }
    }
}

#[cfg_attr(not(unix), allow(unused_variables))]
fn create_dir_all(path: &Path, mode: u32) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    builder.create(path).map_err(|e| Error::at_path(path, e))
}

#[cfg(unix)]
fn dir_mode(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn dir_mode(_metadata: &fs::Metadata) -> u32 {
    0o755
}

/// Walks a template directory and mirrors it into the output directory.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: &'a Path,
    context: &'a TemplateContext,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
        context: &'a TemplateContext,
    ) -> Self {
        Self { engine, template_root, output_root, context }
    }

    fn relative_path<'p>(&self, path: &'p Path) -> Result<&'p Path> {
        path.strip_prefix(self.template_root).map_err(|e| Error::ProcessError {
            source_path: path.display().to_string(),
            e: e.to_string(),
        })
    }

    fn is_excluded_entry(&self, entry: &DirEntry) -> bool {
        match self.relative_path(entry.path()) {
            Ok(relative) if is_excluded(relative) => {
                debug!("Skipping excluded path '{}'", relative.display());
                true
            }
            _ => false,
        }
    }

    /// Works out what to do for one template entry.
    ///
    /// Symlinks to files are followed and the target's content is written as
    /// a regular file. Symlinks to directories are neither followed nor
    /// recreated.
    ///
    /// # Returns
    /// * `Ok(None)` for entries that are neither directories nor (links to)
    ///   regular files
    /// * `Ok(Some(FileOperation))` otherwise
    ///
    /// # Errors
    /// * `Error::PathIoError` if the entry cannot be read, including dangling
    ///   symlinks
    /// * `Error::MinijinjaError` if a template fails to render
    pub fn process(&self, entry: &DirEntry) -> Result<Option<FileOperation>> {
        let source = entry.path();
        let relative = self.relative_path(source)?;
        let target = if relative.as_os_str().is_empty() {
            self.output_root.to_path_buf()
        } else {
            self.output_root.join(relative)
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            let metadata = entry.metadata().map_err(Error::WalkError)?;
            return Ok(Some(FileOperation::CreateDir { target, mode: dir_mode(&metadata) }));
        }
        let is_file = if file_type.is_symlink() {
            fs::metadata(source).map_err(|e| Error::at_path(source, e))?.is_file()
        } else {
            file_type.is_file()
        };
        if !is_file {
            debug!("Skipping '{}': not a regular file", relative.display());
            return Ok(None);
        }

        let bytes = fs::read(source).map_err(|e| Error::at_path(source, e))?;
        let rendered = match std::str::from_utf8(&bytes) {
            Ok(text) => {
                self.engine.render(&relative.to_string_lossy(), text, self.context)?
            }
            Err(_) => None,
        };

        Ok(Some(match rendered {
            Some(content) => {
                debug!("Rendering file: {}", target.display());
                FileOperation::Write { target, content }
            }
            None => {
                debug!("Copying file: {}", target.display());
                FileOperation::Copy { target, content: bytes }
            }
        }))
    }

    /// Processes the whole template tree in file name order.
    ///
    /// Excluded directories are not descended into. The first error stops
    /// the walk; whatever was written before it stays on disk.
    pub fn run(&self) -> Result<()> {
        debug!(
            "Copying template '{}' to '{}'",
            self.template_root.display(),
            self.output_root.display()
        );

        let walker = WalkDir::new(self.template_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_entry(entry));

        for entry in walker {
            let entry = entry?;
            if let Some(operation) = self.process(&entry)? {
                operation.apply()?;
            }
        }
        Ok(())
    }
}

/// Copies `template_root` into `output_root`, rendering each file with
/// `context`.
///
/// # Example
/// ```no_run
/// use gouno::{context::TemplateContext, processor::copy_template};
///
/// let context = TemplateContext::new("github.com/acme/widget", "widget", "");
/// copy_template("template", "widget", &context)?;
/// # Ok::<(), gouno::error::Error>(())
/// ```
pub fn copy_template<S, D>(template_root: S, output_root: D, context: &TemplateContext) -> Result<()>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let engine = MiniJinjaRenderer::new();
    Processor::new(&engine, template_root.as_ref(), output_root.as_ref(), context).run()
}

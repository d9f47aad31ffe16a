//! Template loading for gouno.
//! Resolves the template argument to a local directory, cloning git
//! repositories into a temporary directory first.
use crate::constants::{DEFAULT_TEMPLATE_REPO, TEMP_DIR_PREFIX};
use crate::error::{Error, Result};
use git2::{Cred, CredentialType};
use log::debug;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;

/// Represents the source location of a template.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Creates a TemplateSource from a string path or URL.
    ///
    /// `https`, `http`, `git` and `ssh` URLs as well as `git@host:owner/repo`
    /// are git repositories, everything else is a filesystem path.
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if matches!(url.scheme(), "https" | "http" | "git" | "ssh") {
                return Self::Git(s.to_string());
            }
        }

        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        Self::FileSystem(PathBuf::from(s))
    }
}

/// A template directory ready to be copied.
///
/// For cloned repositories it owns the temporary directory, which is removed
/// when this value is dropped.
#[derive(Debug)]
pub struct LoadedTemplate {
    path: PathBuf,
    _clone_dir: Option<TempDir>,
}

impl LoadedTemplate {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Makes the template available as a local directory.
    fn load(&self) -> Result<LoadedTemplate>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the path is not a directory
    fn load(&self) -> Result<LoadedTemplate> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }

        Ok(LoadedTemplate { path: path.to_path_buf(), _clone_dir: None })
    }
}

/// Credentials callback for clones: ssh remotes authenticate through the
/// running agent, once.
///
/// libgit2 calls the callback again after a rejected key, so a second call
/// for ssh credentials fails instead of offering the same key forever.
/// Remotes asking for anything other than an ssh key are refused.
fn agent_credentials(
) -> impl FnMut(&str, Option<&str>, CredentialType) -> std::result::Result<Cred, git2::Error> {
    let mut attempted = false;
    move |_url: &str, username_from_url: Option<&str>, allowed_types: CredentialType| {
        if !allowed_types.contains(CredentialType::SSH_KEY) {
            return Err(git2::Error::from_str(
                "remote requires credentials other than an ssh key, which are not supported",
            ));
        }
        if attempted {
            return Err(git2::Error::from_str("ssh agent authentication failed"));
        }
        attempted = true;
        Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
    }
}

/// Loader for templates from git repositories.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
}

impl<S: AsRef<str>> GitLoader<S> {
    pub fn new(repo: S) -> Self {
        Self { repo }
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<S> {
    /// Clones the repository into a fresh temporary directory.
    ///
    /// # Errors
    /// * `Error::PathIoError` if the temporary directory cannot be created
    /// * `Error::Git2Error` if the clone fails
    fn load(&self) -> Result<LoadedTemplate> {
        let repo_url = self.repo.as_ref();

        let clone_dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(|e| Error::at_path(std::env::temp_dir(), e))?;

        println!("Cloning template from {} to {}", repo_url, clone_dir.path().display());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(agent_credentials());

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);
        builder.clone(repo_url, clone_dir.path())?;

        debug!("Cloned '{}' into '{}'.", repo_url, clone_dir.path().display());

        Ok(LoadedTemplate { path: clone_dir.path().to_path_buf(), _clone_dir: Some(clone_dir) })
    }
}

/// Returns the template directory for the given template argument.
///
/// Without an argument the default go-uno template repository is cloned.
pub fn load_template(template: Option<&str>) -> Result<LoadedTemplate> {
    let template_source = TemplateSource::from_string(template.unwrap_or(DEFAULT_TEMPLATE_REPO));

    println!("Using template from the {template_source}");

    let loader: Box<dyn TemplateLoader> = match template_source {
        TemplateSource::Git(repo) => Box::new(GitLoader::new(repo)),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
    };

    loader.load()
}

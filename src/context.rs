//! Values substituted into template placeholders.

use serde::Serialize;

/// Names under which the context fields are visible to templates.
pub const FIELD_NAMES: [&str; 3] = ["ModulePath", "ProjectName", "RepoURL"];

/// The three values rendered into every template file of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    #[serde(rename = "ModulePath")]
    module_path: String,
    #[serde(rename = "ProjectName")]
    project_name: String,
    #[serde(rename = "RepoURL")]
    repo_url: String,
}

impl TemplateContext {
    pub fn new<M, P, R>(module_path: M, project_name: P, repo_url: R) -> Self
    where
        M: Into<String>,
        P: Into<String>,
        R: Into<String>,
    {
        Self {
            module_path: module_path.into(),
            project_name: project_name.into(),
            repo_url: repo_url.into(),
        }
    }

    /// Builds the context for a new project, filling in what was not given.
    ///
    /// The module path falls back to the project name and the repository URL
    /// to the one derived from the module path by [`repo_url_for`].
    pub fn for_project(
        project_name: &str,
        module_path: Option<String>,
        repo_url: Option<String>,
    ) -> Self {
        let module_path = module_path
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| project_name.to_string());
        let repo_url = repo_url.unwrap_or_else(|| repo_url_for(&module_path));

        Self::new(module_path, project_name, repo_url)
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }
}

/// Guesses a clone URL from a module path such as `github.com/acme/widget`.
///
/// Only module paths whose first segment looks like a host name yield a URL;
/// anything else gives an empty string.
pub fn repo_url_for(module_path: &str) -> String {
    let host = module_path.split('/').next().unwrap_or_default();
    if host.contains('.') && module_path.contains('/') {
        format!("https://{}.git", module_path.trim_end_matches('/'))
    } else {
        String::new()
    }
}

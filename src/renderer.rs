//! Template rendering for gouno.
//! Decides whether a file is a template and renders it with MiniJinja.
use crate::context::{TemplateContext, FIELD_NAMES};
use crate::error::{Error, Result};
use log::debug;
use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Go-style field reference, e.g. `{{ .ModulePath }}` or `{{- .ProjectName -}}`.
static DOTTED_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(-?)\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*(-?)\}\}")
        .expect("a valid regex pattern")
});

/// Only `{{ }}` is live syntax. Blocks and comments get private-use
/// delimiters so `{%` and `{#` in ordinary files stay plain text.
static SYNTAX: LazyLock<SyntaxConfig> = LazyLock::new(|| {
    SyntaxConfig::builder()
        .variable_delimiters("{{", "}}")
        .block_delimiters("\u{e000}%", "%\u{e000}")
        .comment_delimiters("\u{e000}#", "#\u{e000}")
        .build()
        .expect("valid template delimiters")
});

const VARIABLE_START: &str = "{{";

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders file content with the given context.
    ///
    /// # Arguments
    /// * `name` - Name of the file, used in error messages
    /// * `content` - Full file content
    /// * `context` - Values for the placeholders
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The rendered content
    /// * `Ok(None)` - The content is not a template and must be copied as is
    /// * `Err` - The content is a template but rendering it failed
    fn render(
        &self,
        name: &str,
        content: &str,
        context: &TemplateContext,
    ) -> Result<Option<String>>;
}

/// MiniJinja-based template rendering engine.
///
/// Besides the plain `{{ ModulePath }}` form it accepts the dotted
/// `{{ .ModulePath }}` references used by existing go-uno templates.
#[derive(Debug, Default)]
pub struct MiniJinjaRenderer;

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        Self
    }

    fn environment<'source>() -> Environment<'source> {
        let mut env = Environment::new();
        env.set_syntax(SYNTAX.clone());
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env
    }
}

/// Rewrites dotted field references into plain variables and returns the
/// rewritten source together with the names that were referenced that way.
fn normalize_fields(content: &str) -> (String, HashSet<String>) {
    let dotted = DOTTED_FIELD
        .captures_iter(content)
        .map(|caps| caps[2].to_string())
        .collect();
    let source = DOTTED_FIELD.replace_all(content, "{{${1} ${2} ${3}}}").into_owned();
    (source, dotted)
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders content using MiniJinja.
    ///
    /// Content without `{{`, content that fails to parse, content that
    /// references no field at all and content referring to names that are
    /// not context fields are all reported as "not a template". A dotted
    /// reference to a field the context does not have is a render error.
    fn render(
        &self,
        name: &str,
        content: &str,
        context: &TemplateContext,
    ) -> Result<Option<String>> {
        if !content.contains(VARIABLE_START) {
            return Ok(None);
        }

        let (source, dotted) = normalize_fields(content);
        let env = Self::environment();
        let tmpl = match env.template_from_named_str(name, &source) {
            Ok(tmpl) => tmpl,
            Err(e) => {
                debug!("'{name}' is not a template: {e}");
                return Ok(None);
            }
        };

        let referenced = tmpl.undeclared_variables(false);
        if referenced.is_empty() {
            debug!("'{name}' is not a template: no field references");
            return Ok(None);
        }

        let foreign: Vec<String> = referenced
            .into_iter()
            .filter(|var| !FIELD_NAMES.contains(&var.as_str()) && !dotted.contains(var))
            .collect();
        if !foreign.is_empty() {
            debug!("'{name}' is not a template, unknown names: {}", foreign.join(", "));
            return Ok(None);
        }

        tmpl.render(context).map(Some).map_err(Error::MinijinjaError)
    }
}

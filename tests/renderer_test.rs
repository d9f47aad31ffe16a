use gouno::context::TemplateContext;
use gouno::error::Error;
use gouno::renderer::{MiniJinjaRenderer, TemplateRenderer};

fn context() -> TemplateContext {
    TemplateContext::new(
        "github.com/acme/widget",
        "widget",
        "https://github.com/acme/widget.git",
    )
}

fn render(content: &str) -> Result<Option<String>, Error> {
    MiniJinjaRenderer::new().render("test", content, &context())
}

#[test]
fn test_dotted_field() {
    let result = render("module {{.ModulePath}}").unwrap();
    assert_eq!(result.as_deref(), Some("module github.com/acme/widget"));
}

#[test]
fn test_dotted_field_with_spaces_and_trim_markers() {
    let result = render("name: {{ .ProjectName }}\nurl: {{- .RepoURL -}} !").unwrap();
    assert_eq!(
        result.as_deref(),
        Some("name: widget\nurl:https://github.com/acme/widget.git!")
    );
}

#[test]
fn test_plain_field() {
    let result = render("# {{ ProjectName }}\n").unwrap();
    assert_eq!(result.as_deref(), Some("# widget\n"));
}

#[test]
fn test_keeps_trailing_newline() {
    let result = render("module {{ .ModulePath }}\n\ngo 1.22\n").unwrap();
    assert_eq!(result.as_deref(), Some("module github.com/acme/widget\n\ngo 1.22\n"));
}

#[test]
fn test_no_html_escaping() {
    let context = TemplateContext::new("a/b", "<app>", "");
    let result = MiniJinjaRenderer::new()
        .render("index.html", "<title>{{ .ProjectName }}</title>", &context)
        .unwrap();
    assert_eq!(result.as_deref(), Some("<title><app></title>"));
}

#[test]
fn test_plain_text_is_not_a_template() {
    assert_eq!(render("package main\n\nfunc main() {}\n").unwrap(), None);
}

#[test]
fn test_syntax_error_is_not_a_template() {
    assert_eq!(render("{{ unterminated").unwrap(), None);
    assert_eq!(render("{{/* a comment */}}\n").unwrap(), None);
}

#[test]
fn test_format_verb_braces_are_plain_text() {
    let source = "package main\n\nimport \"{{.ModulePath}}/internal/x\"\n\nfunc main() { fmt.Printf(\"{%d}\\n\", 1) }\n";
    let result = render(source).unwrap();
    assert_eq!(
        result.as_deref(),
        Some("package main\n\nimport \"github.com/acme/widget/internal/x\"\n\nfunc main() { fmt.Printf(\"{%d}\\n\", 1) }\n")
    );
}

#[test]
fn test_shell_hash_braces_are_plain_text() {
    let result = render("#!/bin/sh\n# {{.ProjectName}}\necho ${#ARGS[@]} {# not a comment #}\n").unwrap();
    assert_eq!(
        result.as_deref(),
        Some("#!/bin/sh\n# widget\necho ${#ARGS[@]} {# not a comment #}\n")
    );
}

#[test]
fn test_jinja_blocks_are_plain_text() {
    let result = render("{% if x %}{{ .ProjectName }}{% endif %}").unwrap();
    assert_eq!(result.as_deref(), Some("{% if x %}widget{% endif %}"));
}

#[test]
fn test_expression_without_fields_is_not_a_template() {
    assert_eq!(render("a {{ 1 + 2 }} b\n").unwrap(), None);
    assert_eq!(render("{{ \"literal\" }}").unwrap(), None);
}

#[test]
fn test_unknown_name_is_not_a_template() {
    let workflow = "token: ${{ secrets.TOKEN }}\nname: {{ .ProjectName }}\n";
    assert_eq!(render(workflow).unwrap(), None);
}

#[test]
fn test_unknown_dotted_field_fails() {
    let result = render("version {{ .Version }}");
    assert!(matches!(result, Err(Error::MinijinjaError(_))));
}

//! gouno's application entry point.
//! Parses the command line, fetches the template and generates the project.

use gouno::{
    cli::{get_args, Args, Command, NewArgs},
    context::TemplateContext,
    error::{default_error_handler, Result},
    loader::load_template,
    logger::init_logger,
    processor::copy_template,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::New(new_args) => new_project(new_args),
    }
}

/// Generates a project from the template named in `args`.
///
/// # Flow
/// 1. Builds the template context from the arguments
/// 2. Loads the template, cloning it if it is a git repository
/// 3. Copies and renders the template into the output directory
fn new_project(args: NewArgs) -> Result<()> {
    let output_root = args.output_root();
    let context =
        TemplateContext::for_project(&args.project_name, args.module, args.repo_url);

    let template = load_template(args.template.as_deref())?;

    println!(
        "Creating new project '{}' with module path '{}' from template '{}'",
        context.project_name(),
        context.module_path(),
        template.path().display()
    );

    copy_template(template.path(), &output_root, &context)?;

    println!(
        "Project '{}' created successfully in '{}'",
        context.project_name(),
        output_root.display()
    );
    Ok(())
}

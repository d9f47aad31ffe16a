//! Command-line interface implementation for gouno.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for gouno.
#[derive(Parser, Debug)]
#[command(
    name = "gouno",
    author,
    version,
    about = "gouno: create new web projects from the go-uno template",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new web project from the go-uno template
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Name of the project, also the directory it is created in
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Go module path (e.g., github.com/your/project), defaults to the project name
    #[arg(short, long)]
    pub module: Option<String>,

    /// Path to the template directory or git repository URL.
    /// Clones https://github.com/rushairer/gouno-template when omitted.
    #[arg(short, long)]
    pub template: Option<String>,

    /// Repository URL, derived from the module path when omitted
    #[arg(short, long)]
    pub repo_url: Option<String>,

    /// Directory where the project is created, defaults to ./PROJECT_NAME
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl NewArgs {
    pub fn output_root(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(".").join(&self.project_name))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no subcommand is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingSubcommand
                || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

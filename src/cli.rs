//! Command-line interface implementation for goscaf.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Answers;

/// Command-line arguments structure for goscaf.
#[derive(Parser, Debug)]
#[command(
    name = "goscaf",
    author,
    version,
    about = "goscaf: generate Go web application boilerplate",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Go web application
    Init(InitArgs),
}

/// Options of the `init` subcommand. Every option given here skips its prompt.
#[derive(clap::Args, Debug, Default)]
pub struct InitArgs {
    /// Project name, also the name of the generated directory
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Web framework: fiber, gin, echo, chi or iris
    #[arg(long, value_name = "FRAMEWORK")]
    pub framework: Option<String>,

    /// Database: postgres, mysql or sqlite
    #[arg(long, value_name = "DATABASE")]
    pub database: Option<String>,

    /// ORM: none, gorm, xorm or ent
    #[arg(long, value_name = "ORM")]
    pub orm: Option<String>,

    /// Go module path (defaults to the project name)
    #[arg(long, value_name = "MODULE")]
    pub module: Option<String>,

    /// Directory the project directory is created in
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write into an existing, non-empty project directory
    #[arg(short, long)]
    pub force: bool,

    /// Read answers (JSON or YAML) from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Read answers (JSON or YAML) from a file
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Generate the files without running the Go toolchain
    #[arg(long)]
    pub skip_install: bool,

    /// Print the files and commands that would be produced, without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl InitArgs {
    /// Answers given directly as flags.
    pub fn flag_answers(&self) -> Answers {
        Answers {
            project_name: self.name.clone(),
            module: self.module.clone(),
            framework: self.framework.clone(),
            database: self.database.clone(),
            orm: self.orm.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if the subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
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

//! goscaf's main application entry point.
//! Handles command-line argument parsing, configuration and hands the
//! collected request to the scaffold run.

use goscaf::{
    cli::{get_args, Args, Command, InitArgs},
    error::{default_error_handler, Result},
    installer::ShellRunner,
    logger::init_logger,
    parser::get_answers_from,
    prompt::{collect, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    scaffold::{scaffold, ScaffoldOptions},
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
        Command::Init(init_args) => init(init_args),
    }
}

/// Scaffolds a new project.
///
/// Merges answers from stdin/answers file with command-line flags, prompts
/// for whatever is still missing, then runs the scaffold.
fn init(args: InitArgs) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();
    let runner = ShellRunner::new();

    let answers =
        get_answers_from(args.stdin, args.answers.as_deref())?.merge(args.flag_answers());
    let request = collect(&prompter, answers, &args.output_dir)?;

    let options = ScaffoldOptions {
        force: args.force,
        skip_install: args.skip_install,
        dry_run: args.dry_run,
    };
    let project_path = scaffold(&request, &renderer, &runner, options)?;

    if !args.dry_run {
        println!("Project initialized successfully in {}.", project_path.display());
    }
    Ok(())
}

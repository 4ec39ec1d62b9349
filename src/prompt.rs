//! Interactive configuration.
//! Collects the project name, framework, database and ORM from the operator,
//! skipping every question that was answered ahead of time.

use std::io;
use std::path::Path;

use dialoguer::{Confirm, Input, Select};
use log::debug;

use crate::config::{
    validate_module_path, validate_project_name, Answers, Database, Framework, Orm,
    ScaffoldRequest, TemplateKey,
};
use crate::error::{Error, Result};

/// Source of operator input.
pub trait Prompter {
    /// Asks for free text, offering `default` when given.
    ///
    /// Answers rejected by `validate` are not returned; the operator is asked again.
    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<()>,
    ) -> Result<String>;

    /// Asks the operator to pick one of `items`; returns its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Maps an interrupted prompt to `OperationCancelled`, anything else to an IO error.
fn prompt_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            Error::OperationCancelled
        }
        dialoguer::Error::IO(e) => Error::IoError(e),
        #[allow(unreachable_patterns)]
        other => Error::IoError(io::Error::other(other.to_string())),
    }
}

impl Prompter for DialoguerPrompter {
    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<()>,
    ) -> Result<String> {
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|value: &String| validate(value).map_err(|e| e.to_string()));
        let input = match default {
            Some(default) => input.default(default.to_string()),
            None => input,
        };
        input.interact_text().map_err(prompt_error)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(Error::OperationCancelled)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(Error::OperationCancelled)
    }
}

fn out_of_range(index: usize) -> Error {
    Error::ValidationError(format!("no option at index {index}"))
}

fn select_framework(prompter: &dyn Prompter) -> Result<Framework> {
    let labels: Vec<&str> = Framework::ALL.iter().map(|f| f.label()).collect();
    let index = prompter.select("Choose your web framework:", &labels, 0)?;
    Framework::ALL.get(index).copied().ok_or_else(|| out_of_range(index))
}

fn select_database(prompter: &dyn Prompter) -> Result<Database> {
    let labels: Vec<&str> = Database::ALL.iter().map(|d| d.label()).collect();
    let index = prompter.select("Choose your database system:", &labels, 0)?;
    Database::ALL.get(index).copied().ok_or_else(|| out_of_range(index))
}

fn select_orm(prompter: &dyn Prompter) -> Result<Orm> {
    if !prompter.confirm("Would you like to use an ORM?", false)? {
        return Ok(Orm::None);
    }
    let labels: Vec<&str> = Orm::CHOICES.iter().map(|o| o.label()).collect();
    let index = prompter.select("Choose your ORM framework:", &labels, 0)?;
    Orm::CHOICES.get(index).copied().ok_or_else(|| out_of_range(index))
}

/// Builds a scaffold request from pre-supplied answers and operator input.
///
/// # Arguments
/// * `prompter` - Source of answers for the questions not pre-supplied
/// * `answers` - Values supplied through flags, stdin or an answers file
/// * `output_dir` - Parent directory of the generated project
///
/// # Errors
/// * `Error::OperationCancelled` if the operator aborts a prompt
/// * `Error::InvalidConfiguration` if a pre-supplied option is unknown
/// * `Error::ValidationError` if the project name or module path is malformed
pub fn collect<P: AsRef<Path>>(
    prompter: &dyn Prompter,
    answers: Answers,
    output_dir: P,
) -> Result<ScaffoldRequest> {
    // Pre-supplied values are validated before prompting for the rest
    if let Some(module) = answers.module.as_deref() {
        validate_module_path(module)?;
    }
    let name = match answers.project_name {
        Some(name) => {
            validate_project_name(&name)?;
            name
        }
        None => prompter.input("What is your project name?", None, &|name: &str| {
            validate_project_name(name).map(|_| ())
        })?,
    };

    let framework = answers.framework.as_deref().map(str::parse::<Framework>).transpose()?;
    let database = answers.database.as_deref().map(str::parse::<Database>).transpose()?;
    let orm = answers.orm.as_deref().map(str::parse::<Orm>).transpose()?;

    let framework = match framework {
        Some(framework) => framework,
        None => select_framework(prompter)?,
    };
    let database = match database {
        Some(database) => database,
        None => select_database(prompter)?,
    };
    let orm = match orm {
        Some(orm) => orm,
        None => select_orm(prompter)?,
    };

    let key = TemplateKey::new(framework, database, orm);
    debug!("Collected configuration: '{}' with {}", name, key);

    ScaffoldRequest::new(output_dir, &name, answers.module.as_deref(), key)
}

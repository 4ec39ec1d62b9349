//! Dependency installation for generated projects.
//!
//! The command sequence is built from data tables keyed on framework, database
//! and ORM, then executed one command at a time. Later commands rely on the
//! `go.mod` state left by earlier ones, so the first failure stops the run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::config::{Database, Framework, Orm, ScaffoldRequest};
use crate::constants::{COMMON_PACKAGES, FINALIZE_COMMANDS};
use crate::error::{Error, Result};

/// One shell command and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub working_dir: PathBuf,
    pub command_line: String,
}

impl CommandSpec {
    pub fn new<P: AsRef<Path>, S: Into<String>>(working_dir: P, command_line: S) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
            command_line: command_line.into(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line)
    }
}

/// Exit status reported by a [`CommandRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status: {code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Runs a single command to completion.
pub trait CommandRunner {
    /// Executes `spec` and waits for it to exit.
    ///
    /// # Errors
    /// * `Error::CommandExecutionError` if the command could not be started
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus>;
}

/// Runs commands through `sh -c`, passing stdout and stderr through to the terminal.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(&spec.command_line)
            .current_dir(&spec.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::CommandExecutionError {
                command: spec.command_line.clone(),
                reason: e.to_string(),
            })?;

        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

fn framework_packages(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::Fiber => &["github.com/gofiber/fiber/v2"],
        Framework::Gin => &["github.com/gin-gonic/gin"],
        Framework::Echo => &["github.com/labstack/echo/v4"],
        Framework::Chi => &["github.com/go-chi/chi/v5"],
        Framework::Iris => &["github.com/kataras/iris/v12"],
    }
}

fn database_driver(database: Database) -> &'static str {
    match database {
        Database::Postgres => "github.com/lib/pq",
        Database::Mysql => "github.com/go-sql-driver/mysql",
        Database::Sqlite => "github.com/mattn/go-sqlite3",
    }
}

fn orm_packages(orm: Orm) -> &'static [&'static str] {
    match orm {
        Orm::None => &[],
        Orm::Gorm => &["gorm.io/gorm"],
        Orm::Xorm => &["xorm.io/xorm"],
        Orm::Ent => &["entgo.io/ent", "entgo.io/ent/cmd/ent"],
    }
}

/// ORM-specific dialect package, for ORMs that ship one per database.
fn orm_driver(orm: Orm, database: Database) -> Option<&'static str> {
    match (orm, database) {
        (Orm::Gorm, Database::Postgres) => Some("gorm.io/driver/postgres"),
        (Orm::Gorm, Database::Mysql) => Some("gorm.io/driver/mysql"),
        (Orm::Gorm, Database::Sqlite) => Some("gorm.io/driver/sqlite"),
        _ => None,
    }
}

/// Builds the ordered install sequence for `request`.
///
/// Order: module init, framework, database driver, ORM packages and the ORM's
/// dialect driver, common utilities, then tidy and download.
pub fn plan(request: &ScaffoldRequest) -> Vec<CommandSpec> {
    let dir = &request.project_path;
    let go_get = |package: &str| CommandSpec::new(dir, format!("go get {package}"));

    let mut commands = vec![CommandSpec::new(dir, format!("go mod init {}", request.module))];
    commands.extend(framework_packages(request.framework).iter().copied().map(go_get));
    commands.push(go_get(database_driver(request.database)));
    commands.extend(orm_packages(request.orm).iter().copied().map(go_get));
    commands.extend(orm_driver(request.orm, request.database).map(go_get));
    commands.extend(COMMON_PACKAGES.iter().copied().map(go_get));
    commands.extend(FINALIZE_COMMANDS.iter().map(|c| CommandSpec::new(dir, *c)));
    commands
}

/// Executes commands in order, stopping at the first one that fails.
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Runs `commands` strictly in sequence.
    ///
    /// # Errors
    /// * `Error::CommandExecutionError` for the first command that cannot be
    ///   started or exits non-zero; the commands after it are not run
    pub fn execute(&self, commands: &[CommandSpec]) -> Result<()> {
        for spec in commands {
            println!("Running: {spec}");
            debug!("Executing '{}' in {}", spec, spec.working_dir.display());

            let status = self.runner.run(spec)?;
            if !status.success() {
                return Err(Error::CommandExecutionError {
                    command: spec.command_line.clone(),
                    reason: status.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Plans and runs the install sequence for `request`.
    pub fn install(&self, request: &ScaffoldRequest) -> Result<()> {
        let commands = plan(request);
        debug!("Install plan has {} commands", commands.len());
        self.execute(&commands)?;
        println!("Dependencies installed successfully!");
        Ok(())
    }
}

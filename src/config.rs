//! Scaffold configuration: the selectable options, the pre-supplied answers
//! and the validated request every later stage consumes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Web framework of the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Fiber,
    Gin,
    Echo,
    Chi,
    Iris,
}

impl Framework {
    pub const ALL: [Framework; 5] = [
        Framework::Fiber,
        Framework::Gin,
        Framework::Echo,
        Framework::Chi,
        Framework::Iris,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Fiber => "fiber",
            Framework::Gin => "gin",
            Framework::Echo => "echo",
            Framework::Chi => "chi",
            Framework::Iris => "iris",
        }
    }

    /// Human readable name shown in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Framework::Fiber => "Fiber",
            Framework::Gin => "Gin",
            Framework::Echo => "Echo",
            Framework::Chi => "Chi",
            Framework::Iris => "Iris",
        }
    }
}

/// Database system the generated application connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    Postgres,
    Mysql,
    Sqlite,
}

impl Database {
    pub const ALL: [Database; 3] = [Database::Postgres, Database::Mysql, Database::Sqlite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Postgres => "postgres",
            Database::Mysql => "mysql",
            Database::Sqlite => "sqlite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Database::Postgres => "Postgres",
            Database::Mysql => "MySQL",
            Database::Sqlite => "SQLite",
        }
    }

    /// Canonical connection defaults, shared by `.env` and the connector fallbacks.
    pub fn defaults(&self) -> DatabaseDefaults {
        match self {
            Database::Postgres => DatabaseDefaults {
                user: "postgres",
                password: "postgres",
                host: "localhost",
                port: "5432",
                name: "mydb",
            },
            Database::Mysql => DatabaseDefaults {
                user: "root",
                password: "password",
                host: "localhost",
                port: "3306",
                name: "mydb",
            },
            Database::Sqlite => DatabaseDefaults {
                user: "",
                password: "",
                host: "",
                port: "",
                name: "mydb.db",
            },
        }
    }
}

/// Object-relational mapper layered over the database driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orm {
    None,
    Gorm,
    Xorm,
    Ent,
}

impl Orm {
    pub const ALL: [Orm; 4] = [Orm::None, Orm::Gorm, Orm::Xorm, Orm::Ent];

    /// The ORMs offered once the operator opts into using one.
    pub const CHOICES: [Orm; 3] = [Orm::Gorm, Orm::Xorm, Orm::Ent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orm::None => "none",
            Orm::Gorm => "gorm",
            Orm::Xorm => "xorm",
            Orm::Ent => "ent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Orm::None => "None",
            Orm::Gorm => "GORM",
            Orm::Xorm => "XORM",
            Orm::Ent => "Ent",
        }
    }
}

fn unsupported(field: &str, value: &str) -> Error {
    Error::InvalidConfiguration(format!("unsupported {field} '{value}'"))
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Framework::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| unsupported("framework", s))
    }
}

impl FromStr for Database {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Database::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| unsupported("database", s))
    }
}

impl FromStr for Orm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Orm::ALL
            .into_iter()
            .find(|o| o.as_str() == wanted)
            .ok_or_else(|| unsupported("orm", s))
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Orm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection defaults for one database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatabaseDefaults {
    pub user: &'static str,
    pub password: &'static str,
    pub host: &'static str,
    pub port: &'static str,
    pub name: &'static str,
}

/// The (framework, database, orm) tuple selecting generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub framework: Framework,
    pub database: Database,
    pub orm: Orm,
}

impl TemplateKey {
    pub fn new(framework: Framework, database: Database, orm: Orm) -> Self {
        Self { framework, database, orm }
    }

    /// Builds a key from raw option names, as typed by an operator or read from answers.
    pub fn from_names(framework: &str, database: &str, orm: &str) -> Result<Self> {
        Ok(Self::new(framework.parse()?, database.parse()?, orm.parse()?))
    }

    /// Every key the catalog knows about.
    pub fn all() -> impl Iterator<Item = TemplateKey> {
        Framework::ALL.into_iter().flat_map(|framework| {
            Database::ALL.into_iter().flat_map(move |database| {
                Orm::ALL
                    .into_iter()
                    .map(move |orm| TemplateKey::new(framework, database, orm))
            })
        })
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.framework, self.database, self.orm)
    }
}

/// A validated scaffold request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Directory the project is generated into
    pub project_path: PathBuf,
    /// Go module path, used as import prefix in generated sources
    pub module: String,
    pub framework: Framework,
    pub database: Database,
    pub orm: Orm,
}

impl ScaffoldRequest {
    /// Creates a request for `name` under `output_dir`.
    ///
    /// # Arguments
    /// * `output_dir` - Parent directory of the generated project
    /// * `name` - Project name, also the directory name
    /// * `module` - Go module path; the project name when `None`
    /// * `key` - Selected framework, database and ORM
    ///
    /// # Errors
    /// * `Error::ValidationError` if the name or module path is malformed
    pub fn new<P: AsRef<Path>>(
        output_dir: P,
        name: &str,
        module: Option<&str>,
        key: TemplateKey,
    ) -> Result<Self> {
        let name = validate_project_name(name)?;
        let module = match module {
            Some(module) => validate_module_path(module)?.to_string(),
            None => name.to_string(),
        };

        Ok(Self {
            project_path: output_dir.as_ref().join(name),
            module,
            framework: key.framework,
            database: key.database,
            orm: key.orm,
        })
    }

    pub fn key(&self) -> TemplateKey {
        TemplateKey::new(self.framework, self.database, self.orm)
    }
}

/// Checks that a project name can serve as both a directory and a module name.
pub fn validate_project_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::ValidationError("project name cannot be empty".to_string()));
    }
    let re = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").map_err(|e| {
        Error::ValidationError(format!("project name pattern is invalid: {e}"))
    })?;
    if !re.is_match(name) {
        return Err(Error::ValidationError(format!(
            "project name '{name}' may only contain letters, digits, '.', '_' and '-'"
        )));
    }
    Ok(name)
}

/// Checks a Go module path such as `github.com/acme/shop`.
pub fn validate_module_path(module: &str) -> Result<&str> {
    let module = module.trim();
    let re = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._~-]*(/[A-Za-z0-9._~-]+)*$").map_err(|e| {
        Error::ValidationError(format!("module path pattern is invalid: {e}"))
    })?;
    if !re.is_match(module) {
        return Err(Error::ValidationError(format!(
            "'{module}' is not a valid Go module path"
        )));
    }
    Ok(module)
}

/// Answers supplied ahead of the prompts. Every `Some` skips its prompt.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Answers {
    #[serde(alias = "name")]
    pub project_name: Option<String>,
    pub module: Option<String>,
    pub framework: Option<String>,
    pub database: Option<String>,
    pub orm: Option<String>,
}

impl Answers {
    /// Returns `self` with every value present in `overrides` replaced.
    pub fn merge(self, overrides: Answers) -> Answers {
        Answers {
            project_name: overrides.project_name.or(self.project_name),
            module: overrides.module.or(self.module),
            framework: overrides.framework.or(self.framework),
            database: overrides.database.or(self.database),
            orm: overrides.orm.or(self.orm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_names_are_case_insensitive() {
        assert_eq!("Gin".parse::<Framework>().unwrap(), Framework::Gin);
        assert_eq!("MySQL".parse::<Database>().unwrap(), Database::Mysql);
        assert_eq!(" GORM ".parse::<Orm>().unwrap(), Orm::Gorm);
        assert_eq!("none".parse::<Orm>().unwrap(), Orm::None);
    }

    #[test]
    fn test_template_key_all_covers_every_combination() {
        let keys: Vec<_> = TemplateKey::all().collect();
        assert_eq!(keys.len(), 5 * 3 * 4);
        assert_eq!(keys[0].to_string(), "fiber/postgres/none");
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = Answers {
            project_name: Some("shop".to_string()),
            framework: Some("gin".to_string()),
            ..Default::default()
        };
        let overrides = Answers {
            framework: Some("echo".to_string()),
            ..Default::default()
        };
        let merged = base.merge(overrides);
        assert_eq!(merged.project_name.as_deref(), Some("shop"));
        assert_eq!(merged.framework.as_deref(), Some("echo"));
        assert_eq!(merged.orm, None);
    }
}

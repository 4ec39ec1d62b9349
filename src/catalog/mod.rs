//! Template catalog: maps a template key to the content of every generated file.
//!
//! Selection is a pure lookup over the bodies in [`templates`]; rendering only
//! substitutes the module path, the listen port and the database defaults, so
//! the same key and module always produce byte-identical output.

use std::fmt;

use log::debug;

use crate::config::{Database, Framework, Orm, ScaffoldRequest, TemplateKey};
use crate::constants::DEFAULT_APP_PORT;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

pub mod templates;

/// Kind of file the catalog can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Entrypoint,
    DbConnector,
    Handler,
    Service,
    Repository,
    Routes,
    Env,
    EnvLoader,
    Dockerfile,
    Compose,
}

impl ArtifactKind {
    /// Every kind, in the order files are generated.
    pub const ALL: [ArtifactKind; 10] = [
        ArtifactKind::Entrypoint,
        ArtifactKind::DbConnector,
        ArtifactKind::Repository,
        ArtifactKind::Service,
        ArtifactKind::Handler,
        ArtifactKind::Routes,
        ArtifactKind::EnvLoader,
        ArtifactKind::Env,
        ArtifactKind::Dockerfile,
        ArtifactKind::Compose,
    ];

    /// Location of the artifact inside the generated project.
    pub fn relative_path(&self) -> &'static str {
        match self {
            ArtifactKind::Entrypoint => "cmd/main.go",
            ArtifactKind::DbConnector => "internal/database/database.go",
            ArtifactKind::Handler => "internal/handlers/handler.go",
            ArtifactKind::Service => "internal/services/service.go",
            ArtifactKind::Repository => "internal/repositories/repository.go",
            ArtifactKind::Routes => "internal/routes/routes.go",
            ArtifactKind::Env => ".env",
            ArtifactKind::EnvLoader => "pkg/utils/env_utils.go",
            ArtifactKind::Dockerfile => "Dockerfile",
            ArtifactKind::Compose => "docker-compose.yml",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Entrypoint => "entrypoint",
            ArtifactKind::DbConnector => "database connector",
            ArtifactKind::Handler => "handler",
            ArtifactKind::Service => "service",
            ArtifactKind::Repository => "repository",
            ArtifactKind::Routes => "routes",
            ArtifactKind::Env => "env file",
            ArtifactKind::EnvLoader => "env loader",
            ArtifactKind::Dockerfile => "Dockerfile",
            ArtifactKind::Compose => "compose file",
        };
        f.write_str(name)
    }
}

/// A file to write, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub relative_path: String,
    pub content: String,
}

impl FileSpec {
    pub fn new<S: Into<String>, C: Into<String>>(relative_path: S, content: C) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

/// Returns the raw template body for `kind` under `key`, if the table has one.
pub fn template_source(kind: ArtifactKind, key: &TemplateKey) -> Option<&'static str> {
    use templates::*;

    let source = match kind {
        ArtifactKind::Entrypoint => match key.framework {
            Framework::Fiber => MAIN_FIBER,
            Framework::Gin => MAIN_GIN,
            Framework::Echo => MAIN_ECHO,
            Framework::Chi => MAIN_CHI,
            Framework::Iris => MAIN_IRIS,
        },
        ArtifactKind::DbConnector => match (key.orm, key.database) {
            (Orm::None, Database::Postgres) => CONNECTOR_POSTGRES,
            (Orm::None, Database::Mysql) => CONNECTOR_MYSQL,
            (Orm::None, Database::Sqlite) => CONNECTOR_SQLITE,
            (Orm::Gorm, Database::Postgres) => CONNECTOR_GORM_POSTGRES,
            (Orm::Gorm, Database::Mysql) => CONNECTOR_GORM_MYSQL,
            (Orm::Gorm, Database::Sqlite) => CONNECTOR_GORM_SQLITE,
            (Orm::Xorm, Database::Postgres) => CONNECTOR_XORM_POSTGRES,
            (Orm::Xorm, Database::Mysql) => CONNECTOR_XORM_MYSQL,
            (Orm::Xorm, Database::Sqlite) => CONNECTOR_XORM_SQLITE,
            (Orm::Ent, Database::Postgres) => CONNECTOR_ENT_POSTGRES,
            (Orm::Ent, Database::Mysql) => CONNECTOR_ENT_MYSQL,
            (Orm::Ent, Database::Sqlite) => CONNECTOR_ENT_SQLITE,
        },
        ArtifactKind::Handler => match key.framework {
            Framework::Fiber => HANDLER_FIBER,
            Framework::Gin => HANDLER_GIN,
            Framework::Echo => HANDLER_ECHO,
            Framework::Chi => HANDLER_CHI,
            Framework::Iris => HANDLER_IRIS,
        },
        ArtifactKind::Service => SERVICE,
        ArtifactKind::Repository => match key.orm {
            Orm::None => REPOSITORY_SQL,
            Orm::Gorm => REPOSITORY_GORM,
            Orm::Xorm => REPOSITORY_XORM,
            Orm::Ent => REPOSITORY_ENT,
        },
        ArtifactKind::Routes => match key.framework {
            Framework::Fiber => ROUTES_FIBER,
            Framework::Gin => ROUTES_GIN,
            Framework::Echo => ROUTES_ECHO,
            Framework::Chi => ROUTES_CHI,
            Framework::Iris => ROUTES_IRIS,
        },
        ArtifactKind::Env => ENV,
        ArtifactKind::EnvLoader => ENV_LOADER,
        // go-sqlite3 needs cgo, the other drivers are pure Go
        ArtifactKind::Dockerfile => match key.database {
            Database::Sqlite => DOCKERFILE_CGO,
            Database::Postgres | Database::Mysql => DOCKERFILE,
        },
        ArtifactKind::Compose => match key.database {
            Database::Postgres => COMPOSE_POSTGRES,
            Database::Mysql => COMPOSE_MYSQL,
            Database::Sqlite => COMPOSE_SQLITE,
        },
    };

    Some(source).filter(|s| !s.trim().is_empty())
}

/// Resolves catalog entries into rendered file contents.
pub struct Catalog<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Catalog<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Renders the content of one artifact.
    ///
    /// # Arguments
    /// * `kind` - Artifact to produce
    /// * `key` - Framework, database and ORM selection
    /// * `module` - Go module path substituted into import statements
    ///
    /// # Errors
    /// * `Error::InvalidConfiguration` if the key has no template for `kind`
    ///   or the template renders to nothing
    /// * `Error::MinijinjaError` if rendering fails
    pub fn resolve(&self, kind: ArtifactKind, key: &TemplateKey, module: &str) -> Result<String> {
        let source = template_source(kind, key).ok_or_else(|| {
            Error::InvalidConfiguration(format!("no {kind} template for '{key}'"))
        })?;

        let context = serde_json::json!({
            "module": module,
            "port": DEFAULT_APP_PORT,
            "db": key.database.defaults(),
        });
        let content = self.renderer.render(source, &context)?;

        if content.trim().is_empty() {
            return Err(Error::InvalidConfiguration(format!(
                "{kind} template for '{key}' rendered empty"
            )));
        }
        Ok(content)
    }

    /// Resolves every artifact for `request`, in generation order.
    ///
    /// Fails on the first unresolvable artifact, before anything is written.
    pub fn file_specs(&self, request: &ScaffoldRequest) -> Result<Vec<FileSpec>> {
        let key = request.key();
        debug!("Resolving templates for '{}' (module '{}')", key, request.module);

        ArtifactKind::ALL
            .iter()
            .map(|kind| {
                let content = self.resolve(*kind, &key, &request.module)?;
                Ok(FileSpec::new(kind.relative_path(), content))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_relative_paths_are_unique() {
        let paths: HashSet<_> = ArtifactKind::ALL.iter().map(|k| k.relative_path()).collect();
        assert_eq!(paths.len(), ArtifactKind::ALL.len());
    }

    #[test]
    fn test_every_key_has_a_source_for_every_kind() {
        for key in TemplateKey::all() {
            for kind in ArtifactKind::ALL {
                assert!(
                    template_source(kind, &key).is_some(),
                    "missing {kind} for {key}"
                );
            }
        }
    }

    #[test]
    fn test_connector_depends_on_orm() {
        let plain = TemplateKey::new(Framework::Fiber, Database::Sqlite, Orm::None);
        let gorm = TemplateKey::new(Framework::Fiber, Database::Sqlite, Orm::Gorm);
        assert_eq!(
            template_source(ArtifactKind::DbConnector, &plain),
            Some(templates::CONNECTOR_SQLITE)
        );
        assert_eq!(
            template_source(ArtifactKind::DbConnector, &gorm),
            Some(templates::CONNECTOR_GORM_SQLITE)
        );
    }
}

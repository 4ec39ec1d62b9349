use goscaf::{
    catalog::{ArtifactKind, Catalog},
    config::{Database, Framework, Orm, ScaffoldRequest, TemplateKey},
    error::Error,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
};

fn request(framework: Framework, database: Database, orm: Orm) -> ScaffoldRequest {
    ScaffoldRequest::new(".", "shop", None, TemplateKey::new(framework, database, orm)).unwrap()
}

fn content_of(specs: &[goscaf::catalog::FileSpec], path: &str) -> String {
    specs
        .iter()
        .find(|spec| spec.relative_path == path)
        .map(|spec| spec.content.clone())
        .unwrap_or_else(|| panic!("{path} was not generated"))
}

#[test]
fn test_every_combination_resolves_deterministically() {
    let renderer = MiniJinjaRenderer::new();
    let catalog = Catalog::new(&renderer);

    for key in TemplateKey::all() {
        for kind in ArtifactKind::ALL {
            let first = catalog.resolve(kind, &key, "shop").unwrap();
            let second = catalog.resolve(kind, &key, "shop").unwrap();
            assert!(!first.trim().is_empty(), "{kind} for {key} is empty");
            assert_eq!(first, second, "{kind} for {key} is not deterministic");
            assert!(!first.contains("{{"), "{kind} for {key} has unrendered variables");
        }
    }
}

#[test]
fn test_unknown_names_are_invalid_configuration() {
    for (framework, database, orm) in [
        ("django", "postgres", "none"),
        ("gin", "oracle", "none"),
        ("gin", "postgres", "sqlboiler"),
        ("", "postgres", "none"),
    ] {
        let result = TemplateKey::from_names(framework, database, orm);
        assert!(
            matches!(result, Err(Error::InvalidConfiguration(_))),
            "{framework}/{database}/{orm} should be rejected"
        );
    }
}

struct BlankRenderer;

impl TemplateRenderer for BlankRenderer {
    fn render(&self, _template: &str, _context: &serde_json::Value) -> goscaf::error::Result<String> {
        Ok("\n".to_string())
    }
}

#[test]
fn test_empty_render_is_invalid_configuration() {
    let renderer = BlankRenderer;
    let catalog = Catalog::new(&renderer);
    let key = TemplateKey::new(Framework::Gin, Database::Postgres, Orm::None);

    match catalog.resolve(ArtifactKind::Env, &key, "shop") {
        Err(Error::InvalidConfiguration(msg)) => assert!(msg.contains("gin/postgres/none")),
        other => panic!("Expected InvalidConfiguration, got {other:?}"),
    }
}

#[test]
fn test_gin_postgres_without_orm() {
    let renderer = MiniJinjaRenderer::new();
    let specs = Catalog::new(&renderer)
        .file_specs(&request(Framework::Gin, Database::Postgres, Orm::None))
        .unwrap();

    assert_eq!(specs.len(), ArtifactKind::ALL.len());

    let main = content_of(&specs, "cmd/main.go");
    assert!(main.contains("\"github.com/gin-gonic/gin\""));
    assert!(main.contains("\"shop/internal/database\""));
    assert!(main.contains("database.Connect()"));

    let env = content_of(&specs, ".env");
    for key in ["DB_USER=", "DB_PASSWORD=", "DB_HOST=", "DB_PORT=", "DB_NAME="] {
        assert!(env.contains(key), "{key} missing from .env");
    }
    assert!(env.contains("DB_PORT=5432"));

    let connector = content_of(&specs, "internal/database/database.go");
    assert!(connector.contains("_ \"github.com/lib/pq\""));
    assert!(connector.contains("func Connect() (*sql.DB, error)"));
    assert!(!connector.contains("var DB"));

    let compose = content_of(&specs, "docker-compose.yml");
    assert!(compose.contains("image: postgres"));
}

#[test]
fn test_fiber_sqlite_gorm_uses_orm_connector() {
    let renderer = MiniJinjaRenderer::new();
    let specs = Catalog::new(&renderer)
        .file_specs(&request(Framework::Fiber, Database::Sqlite, Orm::Gorm))
        .unwrap();

    let connector = content_of(&specs, "internal/database/database.go");
    assert!(connector.contains("\"gorm.io/driver/sqlite\""));
    assert!(connector.contains("func Connect() (*gorm.DB, error)"));
    assert!(!connector.contains("database/sql"));

    let repository = content_of(&specs, "internal/repositories/repository.go");
    assert!(repository.contains("func NewRepository(db *gorm.DB) Repository"));

    let dockerfile = content_of(&specs, "Dockerfile");
    assert!(dockerfile.contains("CGO_ENABLED=1"));

    let env = content_of(&specs, ".env");
    assert!(env.contains("DB_NAME=mydb.db"));
}

#[test]
fn test_ent_repository_is_a_stub() {
    let renderer = MiniJinjaRenderer::new();
    let catalog = Catalog::new(&renderer);
    let key = TemplateKey::new(Framework::Chi, Database::Mysql, Orm::Ent);

    let repository = catalog.resolve(ArtifactKind::Repository, &key, "shop").unwrap();
    assert!(repository.contains("return \"data from repository (ent)\", nil"));

    let connector = catalog.resolve(ArtifactKind::DbConnector, &key, "shop").unwrap();
    assert!(connector.contains("entsql.Open(dialect.MySQL, dsn)"));
}

#[test]
fn test_module_path_is_used_as_import_prefix() {
    let renderer = MiniJinjaRenderer::new();
    let request = ScaffoldRequest::new(
        "/tmp",
        "shop",
        Some("github.com/acme/shop"),
        TemplateKey::new(Framework::Echo, Database::Mysql, Orm::Xorm),
    )
    .unwrap();
    let specs = Catalog::new(&renderer).file_specs(&request).unwrap();

    let handler = content_of(&specs, "internal/handlers/handler.go");
    assert!(handler.contains("\"github.com/acme/shop/internal/services\""));
    assert!(handler.contains("\"github.com/labstack/echo/v4\""));

    let routes = content_of(&specs, "internal/routes/routes.go");
    assert!(routes.contains("\"github.com/acme/shop/internal/handlers\""));
}

#[test]
fn test_handlers_pass_request_context() {
    let renderer = MiniJinjaRenderer::new();
    let catalog = Catalog::new(&renderer);

    for framework in Framework::ALL {
        let key = TemplateKey::new(framework, Database::Postgres, Orm::None);
        let handler = catalog.resolve(ArtifactKind::Handler, &key, "shop").unwrap();
        assert!(
            handler.contains("h.service.GetMessage("),
            "{framework} handler does not call the service"
        );
        assert!(!handler.contains("GetMessage()"), "{framework} handler drops the context");
    }
}

//! Common constants used throughout goscaf.

/// Directories created in every generated project, relative to its root.
pub const PROJECT_DIRECTORIES: [&str; 10] = [
    "cmd",
    "internal/database",
    "internal/middleware",
    "internal/models",
    "internal/repositories",
    "internal/services",
    "internal/handlers",
    "internal/routes",
    "pkg/utils",
    "scripts",
];

/// Port the generated server listens on when `PORT` is unset.
pub const DEFAULT_APP_PORT: &str = "3000";

/// Packages fetched for every project after the framework, driver and ORM.
pub const COMMON_PACKAGES: [&str; 2] = ["github.com/joho/godotenv", "golang.org/x/crypto"];

/// Commands that close every install sequence.
pub const FINALIZE_COMMANDS: [&str; 2] = ["go mod tidy", "go mod download"];

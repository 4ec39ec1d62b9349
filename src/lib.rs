//! goscaf generates Go web application skeletons.
//! It collects a framework, database and ORM choice, writes the matching
//! project tree and fetches the Go dependencies for it.

/// Template catalog: (framework, database, orm) to file contents
pub mod catalog;

/// Command-line interface module for goscaf
pub mod cli;

/// Selectable options, pre-supplied answers and the validated scaffold request
pub mod config;

/// Common constants: directory layout, shared packages, default port
pub mod constants;

/// Error types and handling for goscaf
pub mod error;

/// Go module initialization and dependency fetching
pub mod installer;

/// Logger setup
pub mod logger;

/// Answers read from stdin or an answers file
pub mod parser;

/// Writing the resolved files to disk
pub mod processor;

/// Interactive configuration
pub mod prompt;

/// Template rendering
pub mod renderer;

/// Full scaffold run tying the catalog, materializer and installer together
pub mod scaffold;

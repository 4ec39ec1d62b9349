use std::fs;
use std::path::Path;

use goscaf::{
    catalog::{Catalog, FileSpec},
    config::{Database, Framework, Orm, ScaffoldRequest, TemplateKey},
    constants::PROJECT_DIRECTORIES,
    error::Error,
    processor::{
        ensure_output_dir, is_relative_path_valid, materialize, write_file_atomic, SCRATCH_SUFFIX,
    },
    renderer::MiniJinjaRenderer,
};
use tempfile::TempDir;

/// Names of the scratch files left in `dir`.
fn scratch_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(SCRATCH_SUFFIX))
        .collect()
}

fn scaffold_specs(output_dir: &Path) -> (ScaffoldRequest, Vec<FileSpec>) {
    let request = ScaffoldRequest::new(
        output_dir,
        "shop",
        None,
        TemplateKey::new(Framework::Gin, Database::Postgres, Orm::None),
    )
    .unwrap();
    let renderer = MiniJinjaRenderer::new();
    let specs = Catalog::new(&renderer).file_specs(&request).unwrap();
    (request, specs)
}

#[test]
fn test_ensure_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    // Missing directory
    assert!(ensure_output_dir(path.join("new_dir"), false).is_ok());

    // Existing but empty directory
    let empty = path.join("empty");
    fs::create_dir(&empty).unwrap();
    assert!(ensure_output_dir(&empty, false).is_ok());

    // Existing directory with content
    fs::write(empty.join("main.go"), "package main").unwrap();
    assert!(matches!(
        ensure_output_dir(&empty, false),
        Err(Error::OutputDirectoryExistsError { .. })
    ));
    assert!(ensure_output_dir(&empty, true).is_ok());
}

#[test]
fn test_is_relative_path_valid() {
    assert!(!is_relative_path_valid(""));
    assert!(!is_relative_path_valid("/etc/passwd"));
    assert!(!is_relative_path_valid("../outside.go"));
    assert!(!is_relative_path_valid("internal/../../outside.go"));
    assert!(!is_relative_path_valid("internal//handler.go"));
    assert!(is_relative_path_valid(".env"));
    assert!(is_relative_path_valid("cmd/main.go"));
}

#[test_log::test]
fn test_materialize_writes_skeleton_and_files() {
    let temp_dir = TempDir::new().unwrap();
    let (request, specs) = scaffold_specs(temp_dir.path());

    let report = materialize(&request.project_path, &specs);

    assert!(report.is_complete(), "unexpected failures: {:?}", report.failed);
    assert_eq!(report.created.len(), specs.len());
    for dir in PROJECT_DIRECTORIES {
        assert!(request.project_path.join(dir).is_dir(), "{dir} was not created");
    }
    for spec in &specs {
        let written = fs::read_to_string(request.project_path.join(&spec.relative_path)).unwrap();
        assert_eq!(written, spec.content);
    }

    // No scratch files are left next to the targets
    let leftovers: Vec<_> = fs::read_dir(request.project_path.join("cmd"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("main.go")]);
}

#[test]
fn test_materialize_twice_is_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let (request_a, specs_a) = scaffold_specs(first.path());
    let (request_b, specs_b) = scaffold_specs(second.path());
    assert!(materialize(&request_a.project_path, &specs_a).is_complete());
    assert!(materialize(&request_b.project_path, &specs_b).is_complete());

    assert!(!dir_diff::is_different(&request_a.project_path, &request_b.project_path).unwrap());

    // Re-running over an existing tree overwrites it with the same content
    assert!(materialize(&request_a.project_path, &specs_a).is_complete());
    assert!(!dir_diff::is_different(&request_a.project_path, &request_b.project_path).unwrap());
}

#[test]
fn test_materialize_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("shop");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join(".env"), "DB_PORT=1").unwrap();

    let report = materialize(&project, &[FileSpec::new(".env", "DB_PORT=5432\n")]);

    assert!(report.is_complete());
    assert_eq!(fs::read_to_string(project.join(".env")).unwrap(), "DB_PORT=5432\n");
}

#[test_log::test]
fn test_materialize_continues_after_failure() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("shop");
    let specs = vec![
        FileSpec::new("cmd/main.go", "package main\n"),
        // Target is one of the skeleton directories, so the rename fails
        FileSpec::new("internal/handlers", "not a directory\n"),
        FileSpec::new("../escape.go", "package escape\n"),
        FileSpec::new("cmd/main.go", "package duplicate\n"),
        FileSpec::new(".env", "DB_PORT=5432\n"),
    ];

    let report = materialize(&project, &specs);

    assert_eq!(
        report.created,
        vec![project.join("cmd/main.go"), project.join(".env")]
    );
    assert_eq!(report.failed.len(), 3);
    assert!(matches!(report.failed[0].1, Error::FileWriteError { .. }));
    assert_eq!(report.failed[0].0, project.join("internal/handlers"));
    assert!(matches!(report.failed[1].1, Error::ValidationError(_)));
    assert!(matches!(report.failed[2].1, Error::ValidationError(_)));

    assert!(project.join("internal/handlers").is_dir());
    assert!(scratch_files(&project.join("internal")).is_empty());
    assert!(!temp_dir.path().join("escape.go").exists());
    assert_eq!(fs::read_to_string(project.join("cmd/main.go")).unwrap(), "package main\n");
    assert_eq!(fs::read_to_string(project.join(".env")).unwrap(), "DB_PORT=5432\n");
}

#[test]
fn test_write_file_atomic_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("a/b/c.txt");

    write_file_atomic(&target, "hello").unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
    assert!(scratch_files(&temp_dir.path().join("a/b")).is_empty());
}

#[cfg(unix)]
#[test]
fn test_write_file_atomic_ignores_planted_scratch_name() {
    let temp_dir = TempDir::new().unwrap();
    let cmd_dir = temp_dir.path().join("cmd");
    fs::create_dir(&cmd_dir).unwrap();
    let planted = cmd_dir.join(".main.go.goscaf-tmp");
    std::os::unix::fs::symlink("/dev/full", &planted).unwrap();

    write_file_atomic(cmd_dir.join("main.go"), "package main\n").unwrap();

    assert_eq!(
        fs::read_to_string(cmd_dir.join("main.go")).unwrap(),
        "package main\n"
    );
    assert_eq!(fs::read_link(&planted).unwrap(), Path::new("/dev/full"));
    assert_eq!(scratch_files(&cmd_dir), vec![".main.go.goscaf-tmp".to_string()]);
}

#[test]
fn test_write_file_atomic_removes_scratch_on_failure() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("handlers");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("handler.go"), "package handlers\n").unwrap();

    let result = write_file_atomic(&target, "not a directory\n");

    assert!(result.is_err());
    assert!(target.is_dir());
    assert!(scratch_files(temp_dir.path()).is_empty());
}

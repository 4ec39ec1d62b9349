//! Project materialization: creates the directory skeleton and writes the
//! resolved files under the project root.
//!
//! Every file is written independently. A failure is recorded in the report
//! and the remaining files are still attempted, so a failed run can leave a
//! partially populated project behind.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use log::{debug, error};

use crate::catalog::FileSpec;
use crate::constants::PROJECT_DIRECTORIES;
use crate::error::{Error, Result};

/// Suffix of the scratch files written next to each target.
pub const SCRATCH_SUFFIX: &str = ".goscaf-tmp";

/// Outcome of one materialization run.
#[derive(Debug, Default)]
pub struct MaterializeReport {
    /// Files written, in the order they were attempted
    pub created: Vec<PathBuf>,
    /// Directories or files that could not be written, with the cause
    pub failed: Vec<(PathBuf, Error)>,
}

impl MaterializeReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Ensures the project directory is safe to write to.
///
/// # Arguments
/// * `project_path` - Root of the project about to be generated
/// * `force` - Whether writing into a non-empty directory is allowed
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory has content and
///   `force` is false
pub fn ensure_output_dir<P: AsRef<Path>>(project_path: P, force: bool) -> Result<PathBuf> {
    let project_path = project_path.as_ref();
    if project_path.exists() && !force {
        let has_entries = if project_path.is_dir() {
            fs::read_dir(project_path)?.next().is_some()
        } else {
            true
        };
        if has_entries {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: project_path.display().to_string(),
            });
        }
    }
    Ok(project_path.to_path_buf())
}

/// Checks that a FileSpec path stays inside the project root.
///
/// Rejects empty paths, absolute paths, parent-directory segments and empty
/// segments such as `a//b`.
pub fn is_relative_path_valid(relative_path: &str) -> bool {
    if relative_path.trim().is_empty() || relative_path.contains("//") {
        return false;
    }
    let path = Path::new(relative_path);
    path.components()
        .all(|component| matches!(component, Component::Normal(_)))
}

/// Writes `content` to `target` through a temp file and a rename, so the target
/// holds either its old content or the complete new content.
///
/// The scratch file is created exclusively under a random hidden name next to
/// the target and is removed whenever the write or the rename fails.
pub fn write_file_atomic<P: AsRef<Path>>(target: P, content: &str) -> std::io::Result<()> {
    let target = target.as_ref();
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut scratch = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(SCRATCH_SUFFIX)
        .tempfile_in(parent)?;
    scratch.write_all(content.as_bytes())?;
    scratch.persist(target).map_err(|e| e.error)?;
    Ok(())
}

/// Creates the fixed directory skeleton under `project_path`.
///
/// Existing directories are fine. Returns the directories that could not be created.
pub fn create_skeleton(project_path: &Path) -> Vec<(PathBuf, Error)> {
    let mut failed = Vec::new();
    for dir in PROJECT_DIRECTORIES {
        let full_path = project_path.join(dir);
        debug!("Creating directory: {}", full_path.display());
        if let Err(e) = fs::create_dir_all(&full_path) {
            error!("Error creating directory {}: {}", full_path.display(), e);
            failed.push((full_path, Error::IoError(e)));
        }
    }
    failed
}

/// Writes `file_specs` under `project_path`.
///
/// # Arguments
/// * `project_path` - Project root; created along with the skeleton if missing
/// * `file_specs` - Files to write, each relative to the project root
///
/// # Returns
/// * `MaterializeReport` - Written files and the ones that failed, with causes
///
/// # Notes
/// - Existing files are overwritten
/// - A duplicated or escaping relative path is reported as a `ValidationError`
/// - Write failures are reported as `FileWriteError` and do not stop the run
pub fn materialize<P: AsRef<Path>>(project_path: P, file_specs: &[FileSpec]) -> MaterializeReport {
    let project_path = project_path.as_ref();
    let mut report = MaterializeReport {
        failed: create_skeleton(project_path),
        ..Default::default()
    };
    let mut seen = HashSet::new();

    for spec in file_specs {
        let target = project_path.join(&spec.relative_path);

        if !is_relative_path_valid(&spec.relative_path) {
            error!("Refusing to write outside the project: '{}'", spec.relative_path);
            report.failed.push((
                target,
                Error::ValidationError(format!(
                    "'{}' is not a path inside the project",
                    spec.relative_path
                )),
            ));
            continue;
        }
        if !seen.insert(spec.relative_path.as_str()) {
            error!("Duplicate file in scaffold: '{}'", spec.relative_path);
            report.failed.push((
                target,
                Error::ValidationError(format!(
                    "'{}' appears more than once in the scaffold",
                    spec.relative_path
                )),
            ));
            continue;
        }

        debug!("Writing file: {}", target.display());
        match write_file_atomic(&target, &spec.content) {
            Ok(()) => report.created.push(target),
            Err(source) => {
                error!("Error creating {}: {}", target.display(), source);
                let path = target.display().to_string();
                report.failed.push((target, Error::FileWriteError { path, source }));
            }
        }
    }

    report
}

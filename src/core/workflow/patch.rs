use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::core::error::{AppError, ErrorReporter};
use crate::core::workflow::document::WorkflowDocument;
use crate::core::workflow::transform::{GuardDeploySteps, WorkflowTransform};

/// Outcome classification for one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Patched,
    Clean,
    Missing,
    Error,
}

/// Per-file record for the batch report.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub patched_steps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch-level rollup across all input files.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub files: Vec<FileReport>,
    pub total_patched: usize,
}

/// Guard one workflow file in place. The file is rewritten only when at
/// least one step was patched, so untouched files keep their exact bytes.
pub fn patch_file(path: &Path) -> Result<usize, AppError> {
    let document = WorkflowDocument::load_from_file(path)?;
    let outcome = GuardDeploySteps.transform(document)?;
    if outcome.changed_steps > 0 {
        outcome.document.save_to_file(path)?;
    }
    debug!(path = %path.display(), patched = outcome.changed_steps, "processed workflow file");
    Ok(outcome.changed_steps)
}

/// Guard every listed workflow file, continuing past per-file failures.
/// Missing files and parse errors go through the reporter and are folded
/// into the summary instead of aborting the batch.
pub fn patch_files(paths: &[PathBuf], reporter: &dyn ErrorReporter) -> BatchSummary {
    let mut files = Vec::with_capacity(paths.len());
    let mut total_patched = 0;
    for path in paths {
        if !path.exists() {
            reporter.report_warning(&format!("File not found: {}", path.display()));
            files.push(FileReport {
                path: path.clone(),
                status: FileStatus::Missing,
                patched_steps: 0,
                error: None,
            });
            continue;
        }
        match patch_file(path) {
            Ok(patched) => {
                total_patched += patched;
                let status = if patched > 0 {
                    FileStatus::Patched
                } else {
                    FileStatus::Clean
                };
                files.push(FileReport {
                    path: path.clone(),
                    status,
                    patched_steps: patched,
                    error: None,
                });
            }
            Err(err) => {
                reporter.report_error(&err);
                files.push(FileReport {
                    path: path.clone(),
                    status: FileStatus::Error,
                    patched_steps: 0,
                    error: Some(err.message.clone()),
                });
            }
        }
    }
    BatchSummary {
        files,
        total_patched,
    }
}

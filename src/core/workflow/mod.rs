//! Deploy-guard support for CI workflow files.

pub mod document;
pub mod guard;
pub mod patch;
pub mod step;
pub mod transform;

pub use document::WorkflowDocument;
pub use guard::{GUARD_MARKER, GUARD_PREFIX};
pub use patch::{patch_file, patch_files, BatchSummary, FileReport, FileStatus};
pub use transform::{GuardDeploySteps, TransformOutcome, WorkflowTransform};

pub mod error;
pub mod types;
pub mod workflow;

pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use types::*;
pub use workflow::{patch_file, patch_files, BatchSummary, FileStatus, WorkflowDocument};

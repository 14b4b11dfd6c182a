use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct PatchArgs {
    /// Workflow files to patch in place
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Emit either terminal-friendly text or machine-readable JSON
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, clap::ValueEnum, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable per-file summary lines
    Text,
    /// JSON payload suitable for downstream tooling
    Json,
}

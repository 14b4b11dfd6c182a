use clap::CommandFactory;
use tracing::debug;

use crate::cli::args::{PatchArgs, ReportFormat};
use crate::cli::Args;
use crate::core::error::{AppError, DefaultErrorReporter, ErrorReporter};
use crate::core::types::ErrorCategory;
use crate::core::workflow::{self, guard, BatchSummary, FileStatus};

const EXIT_FAILURE: i32 = 1;
const EXIT_ENVIRONMENT: i32 = 2;

/// Patch the listed workflow files and report the result. Returns the
/// process exit code.
pub fn patch(args: PatchArgs) -> i32 {
    if args.files.is_empty() {
        let mut command = Args::command();
        eprintln!("{}", command.render_usage());
        eprintln!("\nFor more information, try '--help'.");
        return EXIT_FAILURE;
    }

    let reporter = DefaultErrorReporter::new();
    // The keyword matcher is compiled before any file is opened so a broken
    // environment aborts the whole run instead of half of it.
    if let Err(err) = guard::deploy_pattern() {
        reporter.report_error(&err);
        return EXIT_ENVIRONMENT;
    }

    debug!("patching {} workflow file(s)", args.files.len());
    let summary = workflow::patch_files(&args.files, &reporter);
    render_summary(&summary, args.format, &reporter)
}

fn render_summary(
    summary: &BatchSummary,
    format: ReportFormat,
    reporter: &dyn ErrorReporter,
) -> i32 {
    match format {
        ReportFormat::Text => {
            for file in &summary.files {
                match file.status {
                    FileStatus::Patched => reporter.report_info(&format!(
                        "Patched {}: inserted guards in {} step(s)",
                        file.path.display(),
                        file.patched_steps
                    )),
                    FileStatus::Clean => reporter.report_info(&format!(
                        "No deploy-related steps found in {}",
                        file.path.display()
                    )),
                    FileStatus::Missing | FileStatus::Error => {}
                }
            }
            reporter.report_info(&format!("Total steps patched: {}", summary.total_patched));
            0
        }
        ReportFormat::Json => match serde_json::to_string_pretty(summary) {
            Ok(rendered) => {
                reporter.report_info(&rendered);
                0
            }
            Err(err) => {
                let error = AppError::with_source(
                    ErrorCategory::InternalError,
                    "failed to render JSON report",
                    Box::new(err),
                );
                reporter.report_error(&error);
                EXIT_FAILURE
            }
        },
    }
}

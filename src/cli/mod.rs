pub mod args;
pub mod commands;

pub use args::{PatchArgs, ReportFormat};
use clap::Parser;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nARGUMENTS:\n{positionals}\n\
\nOPTIONS:\n{options}\n";

#[derive(Parser, Debug)]
#[command(name = "stepguard")]
#[command(version = crate::VERSION)]
#[command(about = "Inject DEPLOY_ENABLED guards into deploy steps of CI workflow files")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: run stepguard over .github/workflows/*.yml before merging, then set DEPLOY_ENABLED=true only in environments that are allowed to deploy."
)]
pub struct Args {
    #[command(flatten)]
    pub patch: PatchArgs,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Quiet mode - suppress non-error diagnostics
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

pub fn run(args: Args) -> i32 {
    commands::patch(args.patch)
}

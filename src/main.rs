use clap::Parser;
use stepguard::cli::{self, Args};
use stepguard::logging::{self, LoggingConfig};
use tracing::debug;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap sends help and version to stdout; anything on stderr is a
            // usage error and maps to exit code 1.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let config = match LoggingConfig::load(args.log_level.as_deref(), args.quiet) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    };
    if let Err(err) = logging::init(&config) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }

    debug!("stepguard v{} starting", stepguard::VERSION);
    let exit_code = cli::run(args);
    std::process::exit(exit_code);
}

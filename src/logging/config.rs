use crate::Result;
use anyhow::anyhow;
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

const DEFAULT_LEVEL: &str = "info";

/// Environment variable overriding the default log level.
pub const LOG_LEVEL_ENV: &str = "STEPGUARD_LOG";

/// Environment variable overriding the console sink.
pub const LOG_DEST_ENV: &str = "STEPGUARD_LOG_DEST";

/// Resolved logging configuration after applying env and CLI overrides.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub default_level: String,
    pub console_output: ConsoleOutput,
}

/// Where console logs should be emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConsoleOutput {
    Stdout,
    #[default]
    Stderr,
    None,
}

impl fmt::Display for ConsoleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleOutput::Stdout => write!(f, "stdout"),
            ConsoleOutput::Stderr => write!(f, "stderr"),
            ConsoleOutput::None => write!(f, "none"),
        }
    }
}

impl FromStr for ConsoleOutput {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "stdout" => Ok(ConsoleOutput::Stdout),
            "stderr" => Ok(ConsoleOutput::Stderr),
            "none" => Ok(ConsoleOutput::None),
            _ => Err(format!(
                "invalid {} '{}'; supported values are stdout, stderr, none",
                LOG_DEST_ENV, value
            )),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL.to_string(),
            console_output: ConsoleOutput::default(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration with deterministic precedence: defaults, env
    /// overrides, CLI flags. RUST_LOG, when set, still wins at filter
    /// construction time.
    pub fn load(cli_level: Option<&str>, quiet: bool) -> Result<Self> {
        let mut config = LoggingConfig::default();
        config.apply_env_overrides()?;
        if let Some(level) = cli_level {
            config.default_level = level.to_string();
        }
        if quiet {
            config.default_level = "error".to_string();
        }
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.default_level = level;
            }
        }
        if let Ok(dest) = env::var(LOG_DEST_ENV) {
            if !dest.trim().is_empty() {
                self.console_output = ConsoleOutput::from_str(&dest).map_err(|err| anyhow!(err))?;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        Directive::from_str(&self.default_level)
            .map_err(|_| anyhow!("log level must be a valid tracing directive"))?;
        Ok(())
    }
}

use std::sync::OnceLock;

use regex::Regex;
use serde_yaml::Value;

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;

/// Shell prologue prepended to deploy-related run commands. The trailing
/// newline keeps the original first command line on its own line.
pub const GUARD_PREFIX: &str = r#"if [ "${DEPLOY_ENABLED:-false}" != "true" ]; then
  echo "Skipping deploy step: DEPLOY_ENABLED != true"
  exit 0
fi
"#;

/// Substring that marks an already guarded command. Matching on the message
/// text rather than the full prologue keeps old guard revisions recognized.
pub const GUARD_MARKER: &str = "Skipping deploy step: DEPLOY_ENABLED";

const DEPLOY_PATTERN_SOURCE: &str =
    r"(?i)\b(kubectl|helm|gcloud|aws\s+s3|aws\s+ecr|docker\s+push|buildx|terraform|apply|deploy)\b";

static DEPLOY_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Compiled deploy-keyword matcher, built once per process. Compilation is
/// checked at startup so a broken pattern aborts before any file is touched.
pub fn deploy_pattern() -> Result<&'static Regex, AppError> {
    if let Some(pattern) = DEPLOY_PATTERN.get() {
        return Ok(pattern);
    }
    let pattern = Regex::new(DEPLOY_PATTERN_SOURCE).map_err(|e| {
        AppError::with_source(
            ErrorCategory::EnvironmentError,
            "deploy keyword pattern failed to compile",
            Box::new(e),
        )
        .with_suggestion("reinstall stepguard; the bundled pattern is invalid")
    })?;
    Ok(DEPLOY_PATTERN.get_or_init(|| pattern))
}

/// Prepends the guard to a deploy-related `run` value. Returns true when the
/// value was modified.
pub fn apply_guard(run: &mut Value, pattern: &Regex) -> bool {
    match run {
        Value::String(command) => {
            if !pattern.is_match(command) || command.contains(GUARD_MARKER) {
                return false;
            }
            *command = format!("{GUARD_PREFIX}{command}");
            true
        }
        other => {
            // A guarded non-string run collapses to its rendered text; the
            // original node shape is not preserved.
            let rendered = match serde_yaml::to_string(other) {
                Ok(text) => text.trim().to_string(),
                Err(_) => return false,
            };
            if !pattern.is_match(&rendered) {
                return false;
            }
            *other = Value::String(format!("{GUARD_PREFIX}{rendered}"));
            true
        }
    }
}

use crate::core::types::{ErrorCategory, ErrorSeverity};

#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub code: String,
    pub message: String,
    pub recovery_suggestions: Vec<String>,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        let severity = match category {
            ErrorCategory::EnvironmentError
            | ErrorCategory::IoError
            | ErrorCategory::ParseError
            | ErrorCategory::ValidationError => ErrorSeverity::Error,
            ErrorCategory::InternalError => ErrorSeverity::Error,
        };
        AppError {
            category,
            severity,
            code: default_code(category).to_string(),
            message: message.into(),
            recovery_suggestions: vec![],
            source: None,
        }
    }

    pub fn with_source<T: Into<String>>(
        category: ErrorCategory,
        message: T,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        let mut error = AppError::new(category, message);
        error.source = Some(anyhow::anyhow!(source));
        error
    }

    pub fn with_code<T: Into<String>>(mut self, code: T) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_suggestion<T: Into<String>>(mut self, suggestion: T) -> Self {
        self.recovery_suggestions.push(suggestion.into());
        self
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.severity
    }
}

fn default_code(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::EnvironmentError => "SG-ENV-001",
        ErrorCategory::IoError => "SG-IO-001",
        ErrorCategory::ParseError => "SG-PARSE-001",
        ErrorCategory::ValidationError => "SG-VALIDATE-001",
        ErrorCategory::InternalError => "SG-INTERNAL-001",
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError {
            category: ErrorCategory::IoError,
            severity: ErrorSeverity::Error,
            code: default_code(ErrorCategory::IoError).to_string(),
            message: e.to_string(),
            recovery_suggestions: vec!["Check file permissions and paths".to_string()],
            source: Some(anyhow::anyhow!(e)),
        }
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError {
            category: ErrorCategory::ParseError,
            severity: ErrorSeverity::Error,
            code: default_code(ErrorCategory::ParseError).to_string(),
            message: e.to_string(),
            recovery_suggestions: vec!["Fix the YAML syntax and re-run".to_string()],
            source: Some(anyhow::anyhow!(e)),
        }
    }
}

/// Reporting seam for user-facing output. Contract lines are emitted
/// verbatim, so implementations must not decorate messages.
pub trait ErrorReporter {
    fn report_error(&self, error: &AppError);
    fn report_warning(&self, message: &str);
    fn report_info(&self, message: &str);
}

/// Reporter used by the CLI: info lines to stdout, everything else to stderr.
pub struct DefaultErrorReporter;

impl DefaultErrorReporter {
    pub fn new() -> Self {
        DefaultErrorReporter
    }
}

impl Default for DefaultErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for DefaultErrorReporter {
    fn report_error(&self, error: &AppError) {
        eprintln!("{}", error);
        for suggestion in &error.recovery_suggestions {
            eprintln!("  Suggestion: {}", suggestion);
        }
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_info(&self, message: &str) {
        println!("{}", message);
    }
}

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tempfile::NamedTempFile;

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;

/// A workflow file held as a raw YAML tree.
///
/// Round-tripping through the tree keeps key order but normalizes comments
/// and scalar quoting away; callers must not write a document back unless
/// something actually changed.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowDocument {
    root: Value,
}

impl WorkflowDocument {
    /// Load a workflow document from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|err| {
            AppError::new(
                ErrorCategory::IoError,
                format!("failed to read {}: {}", path.display(), err),
            )
        })?;
        if text.trim().is_empty() {
            return Ok(WorkflowDocument { root: Value::Null });
        }
        let root: Value = serde_yaml::from_str(&text).map_err(|err| {
            AppError::new(
                ErrorCategory::ParseError,
                format!("failed to parse {}: {}", path.display(), err),
            )
            .with_suggestion("Fix the YAML syntax and re-run")
        })?;
        Ok(WorkflowDocument { root })
    }

    /// Parse a workflow document from YAML text. Empty input yields an empty
    /// document rather than a parse error.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        if text.trim().is_empty() {
            return Ok(WorkflowDocument { root: Value::Null });
        }
        let root: Value = serde_yaml::from_str(text)?;
        Ok(WorkflowDocument { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Mutable view of the top-level `jobs` mapping, when the document has one.
    pub fn jobs_mut(&mut self) -> Option<&mut Mapping> {
        self.root.get_mut("jobs").and_then(Value::as_mapping_mut)
    }

    /// Serialize the tree back to YAML text.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        let text = serde_yaml::to_string(&self.root)?;
        Ok(text)
    }

    /// Write the document to `path` through a sibling temp file so the target
    /// is replaced in full or not at all.
    pub fn save_to_file(&self, path: &Path) -> Result<(), AppError> {
        let rendered = self.to_yaml()?;
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(parent).map_err(|err| {
            AppError::new(
                ErrorCategory::IoError,
                format!("failed to stage write for {}: {}", path.display(), err),
            )
        })?;
        staged.write_all(rendered.as_bytes()).map_err(|err| {
            AppError::new(
                ErrorCategory::IoError,
                format!("failed to write {}: {}", path.display(), err),
            )
        })?;
        if let Ok(metadata) = fs::metadata(path) {
            let _ = fs::set_permissions(staged.path(), metadata.permissions());
        }
        staged.persist(path).map_err(|err| {
            AppError::new(
                ErrorCategory::IoError,
                format!("failed to replace {}: {}", path.display(), err),
            )
        })?;
        Ok(())
    }
}

//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`StarpostError`] which covers every failure mode of the
//! copy flow. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the variants that carry context.
//!
//! # Public API
//! - [`StarpostError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, StarpostError>`
//!
//! # Error Categories
//! - **Editor**: No active editor, invalid or out-of-range selections
//! - **Git**: Repository not found, detached HEAD, git2 library errors.
//!   These are recovered by the context collector and only ever logged.
//! - **Templates**: Missing template files, syntax and render errors
//! - **Clipboard / config**: Clipboard access and configuration file errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for starpost
#[derive(Error, Debug)]
pub enum StarpostError {
    // Editor errors
    #[error("No active editor")]
    NoActiveEditor,

    #[error("Invalid selection: start line ({start}) must be <= end line ({end})")]
    InvalidLineRange { start: u32, end: u32 },

    #[error("Line {line} is out of range ({count} lines in file)")]
    LineOutOfRange { line: u32, count: usize },

    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("No open repository contains {path}")]
    NoRepositoryForFile { path: PathBuf },

    #[error("HEAD is detached")]
    DetachedHead,

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    // Template errors
    #[error("Template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("Template syntax error in '{name}': {message}")]
    TemplateSyntax { name: String, message: String },

    #[error("Failed to render template '{name}': {message}")]
    TemplateRender { name: String, message: String },

    // Clipboard errors
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(#[from] arboard::Error),

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // File operation errors
    #[error("File does not exist: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using StarpostError
pub type Result<T> = std::result::Result<T, StarpostError>;

impl StarpostError {
    /// Create an invalid line range error
    pub fn invalid_line_range(start: u32, end: u32) -> Self {
        Self::InvalidLineRange { start, end }
    }

    /// Create a line out of range error
    pub fn line_out_of_range(line: u32, count: usize) -> Self {
        Self::LineOutOfRange { line, count }
    }

    /// Create a no repository error for the given document path
    pub fn no_repository_for_file(path: impl Into<PathBuf>) -> Self {
        Self::NoRepositoryForFile { path: path.into() }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a template not found error
    pub fn template_not_found(path: impl Into<PathBuf>) -> Self {
        Self::TemplateNotFound { path: path.into() }
    }

    /// Create a template syntax error from a tera error
    pub fn template_syntax(name: impl Into<String>, source: &tera::Error) -> Self {
        Self::TemplateSyntax {
            name: name.into(),
            message: error_chain(source),
        }
    }

    /// Create a template render error from a tera error
    pub fn template_render(name: impl Into<String>, source: &tera::Error) -> Self {
        Self::TemplateRender {
            name: name.into(),
            message: error_chain(source),
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error belongs to the recoverable git category
    pub fn is_git_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::NotInGitRepo | Self::NoRepositoryForFile { .. } | Self::DetachedHead | Self::Git(_)
        )
    }
}

/// Flatten an error and its sources into a single line.
///
/// Tera keeps the useful detail (line, column, expected token) in the source
/// chain, the top-level message only names the template.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StarpostError::NoActiveEditor;
        assert_eq!(err.to_string(), "No active editor");
    }

    #[test]
    fn test_invalid_line_range_error() {
        let err = StarpostError::invalid_line_range(12, 10);
        assert_eq!(
            err.to_string(),
            "Invalid selection: start line (12) must be <= end line (10)"
        );
    }

    #[test]
    fn test_line_out_of_range_error() {
        let err = StarpostError::line_out_of_range(40, 3);
        assert_eq!(err.to_string(), "Line 40 is out of range (3 lines in file)");
    }

    #[test]
    fn test_template_not_found_error() {
        let err = StarpostError::template_not_found("/tmp/missing.tera");
        assert!(err.to_string().contains("/tmp/missing.tera"));
        assert!(err.to_string().starts_with("Template not found"));
    }

    #[test]
    fn test_template_syntax_includes_source_chain() {
        let mut tera = tera::Tera::default();
        let parse_err = tera.add_raw_template("broken", "{{ file ").unwrap_err();
        let err = StarpostError::template_syntax("broken", &parse_err);
        let message = err.to_string();
        assert!(message.starts_with("Template syntax error in 'broken'"));
        // The chain carries more than the bare "Failed to parse" line
        assert!(message.matches(": ").count() >= 2);
    }

    #[test]
    fn test_config_parse_failed() {
        let path = std::path::PathBuf::from("/test/config.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = StarpostError::config_parse_failed(&path, json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_git_lookup_failure_category() {
        assert!(StarpostError::NotInGitRepo.is_git_lookup_failure());
        assert!(StarpostError::DetachedHead.is_git_lookup_failure());
        assert!(StarpostError::no_repository_for_file("/a/b.rs").is_git_lookup_failure());
        assert!(StarpostError::Git(git2::Error::from_str("boom")).is_git_lookup_failure());
        assert!(!StarpostError::NoActiveEditor.is_git_lookup_failure());
    }
}

//! Error types for plancard-core
//!
//! Configuration problems are reported once, when overrides are loaded and
//! the plan catalog is built. Nothing downstream of that point can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for plancard operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Content Errors
    // ===================
    #[error("Invalid price for {key}: {value:?} (expected \"$<digits>\" or \"Custom\")")]
    InvalidPrice { key: &'static str, value: String },

    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported override format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Severity level for configuration findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Honoured as written, but probably not what the author meant
    Warning,
    /// Rejected; the section cannot be rendered with this value
    Error,
}

/// Individual finding in a configuration report
#[derive(Debug, Clone, serde::Serialize)]
pub struct ConfigFinding {
    /// Configuration key the finding is about
    pub key: String,
    pub message: String,
    pub severity: ErrorSeverity,
    /// Actionable suggestion for the author (optional)
    pub suggestion: Option<String>,
}

impl ConfigFinding {
    pub fn warning(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            severity: ErrorSeverity::Warning,
            suggestion: None,
        }
    }

    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            severity: ErrorSeverity::Error,
            suggestion: None,
        }
    }

    /// Add an actionable suggestion to this finding
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create a finding from a CoreError with context-aware suggestions
    ///
    /// Errors that concern the whole file are keyed by its path.
    pub fn from_core_error(error: &CoreError) -> Self {
        match error {
            CoreError::InvalidPrice { key, value } => {
                Self::error(*key, format!("Cannot project price {:?}", value)).with_suggestion(
                    format!("Use a whole dollar amount like \"$49\" or \"Custom\" for {}", key),
                )
            }
            CoreError::FileNotFound { path } => {
                Self::error(path.display().to_string(), "Override file not found")
                    .with_suggestion("Pass an existing file with --config or unset PLANCARD_CONFIG")
            }
            CoreError::FileRead { path, source } => Self::error(
                path.display().to_string(),
                format!("Cannot read override file: {}", source),
            ),
            CoreError::UnsupportedFormat { path } => Self::error(
                path.display().to_string(),
                "Unsupported override format",
            )
            .with_suggestion("Rename the file to .json, .yaml or .yml"),
            CoreError::JsonParse { path, message, .. } | CoreError::YamlParse { path, message, .. } => {
                Self::error(path.display().to_string(), message.clone())
                    .with_suggestion("Every value must be a string keyed by a content identifier")
            }
        }
    }
}

/// Report of findings gathered while loading and resolving overrides
///
/// Warnings never block rendering; any error means the overrides must be
/// fixed before the section can be served.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct ConfigReport {
    pub findings: Vec<ConfigFinding>,
    /// Number of recognised keys the overrides set
    pub overridden: usize,
}

impl ConfigReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: ConfigFinding) {
        self.findings.push(finding);
    }

    pub fn add_warning(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.findings.push(ConfigFinding::warning(key, message));
    }

    /// Returns true if any finding is an error
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == ErrorSeverity::Error)
    }

    /// Returns only warnings
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigFinding> {
        self.findings
            .iter()
            .filter(|f| f.severity == ErrorSeverity::Warning)
    }

    /// Returns (warnings, errors)
    pub fn counts(&self) -> (usize, usize) {
        let warnings = self.warnings().count();
        (warnings, self.findings.len() - warnings)
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

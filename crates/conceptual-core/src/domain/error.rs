// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    #[error("Project name required (or use --here)")]
    MissingProjectName,

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("Unknown AI assistant '{0}'")]
    UnknownAssistant(String),

    #[error("Unknown script type '{0}'")]
    UnknownScriptKind(String),

    #[error("Cannot read version from '{0}'")]
    InvalidVersion(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProjectName => vec![
                "Pass a project name: conceptual init my-project".into(),
                "Or initialize the current directory: conceptual init --here".into(),
            ],
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use a plain directory name without path separators".into(),
                "Examples: my-project, shop_model, calendar2".into(),
            ],
            Self::UnknownAssistant(_) => vec![
                "Supported assistants:".into(),
                "  • claude, copilot, cursor-agent, windsurf, amp, gemini".into(),
            ],
            Self::UnknownScriptKind(_) => vec!["Supported script types: sh, ps".into()],
            Self::InvalidVersion(_) => vec!["Expected a version like 1.85.0".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingProjectName | Self::InvalidProjectName { .. } => ErrorCategory::Usage,
            Self::UnknownAssistant(_) | Self::UnknownScriptKind(_) => ErrorCategory::Validation,
            Self::InvalidVersion(_) => ErrorCategory::Internal,
        }
    }
}

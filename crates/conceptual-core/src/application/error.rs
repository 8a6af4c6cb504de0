//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Target directory already has content and `--force` was not given.
    #[error("Directory {path} is not empty")]
    TargetNotEmpty { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The external version-control tool is missing or failed.
    #[error("{tool} failed: {reason}")]
    VersionControlFailed { tool: &'static str, reason: String },

    /// Shared state lock poisoned (in-memory adapters).
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetNotEmpty { path } => vec![
                format!("Directory already has content: {}", path.display()),
                "Use --force to initialize anyway (copied folders are replaced)".into(),
                "Choose a different project name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::VersionControlFailed { tool, .. } => vec![
                format!("Ensure {tool} is installed and in your PATH"),
                "Or skip it with --no-git".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetNotEmpty { .. } => ErrorCategory::Usage,
            Self::VersionControlFailed { .. } => ErrorCategory::Environment,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

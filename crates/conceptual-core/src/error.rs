//! Errors crossing the core crate boundary.
//!
//! Every port and service returns [`KitError`]. Callers need two things
//! from it: what to tell the user, and which [`ErrorCategory`] the failure
//! belongs to so the binary can pick an exit status.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum KitError {
    /// Bad project name, or a value that failed to parse.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The target cannot be written or an external tool failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl KitError {
    /// Hints printed under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// How a failure is classified, shared by both layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or unusable project name, or a target that needs `--force`.
    Usage,
    /// An assistant or script name that is not recognised.
    Validation,
    /// The machine lacks a tool a step needs.
    Environment,
    /// Filesystem failure or a broken invariant.
    Internal,
}

impl ErrorCategory {
    /// `true` when rerunning with different arguments can succeed.
    pub const fn is_user_fixable(self) -> bool {
        matches!(self, Self::Usage | Self::Validation)
    }
}

/// Convenient result type alias.
pub type KitResult<T> = Result<T, KitError>;

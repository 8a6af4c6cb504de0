//! Application layer for Conceptual Kit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InitService, CheckService) and the
//!   building blocks they share (ResourceLocator, ScaffoldWriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Pure rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CheckService, InitRequest, InitService, InstallLayout, Installed, LayoutStrategy,
    MINIMUM_RUNTIME, RUNTIME_COMPONENT, ResourceLocator, ScaffoldWriter,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ToolProbe, VersionControl};

pub use error::ApplicationError;

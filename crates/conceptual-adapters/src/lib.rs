//! Infrastructure adapters for Conceptual Kit.
//!
//! This crate implements the ports defined in `conceptual-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod layout;
pub mod probe;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use layout::ProcessEnvironment;
pub use probe::PathToolProbe;
pub use vcs::{GitCli, GitError};

//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `conceptual-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::KitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `conceptual_adapters::filesystem::LocalFilesystem` (production)
/// - `conceptual_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KitResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> KitResult<()>;

    /// Copy a single file.
    fn copy_file(&self, from: &Path, to: &Path) -> KitResult<()>;

    /// Recursively copy a directory tree onto `to` (created if absent).
    fn copy_dir_all(&self, from: &Path, to: &Path) -> KitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// `true` when `a` and `b` resolve to the same entry.
    ///
    /// Paths that cannot be resolved are never the same.
    fn same_location(&self, a: &Path, b: &Path) -> bool;

    /// `true` if `path` is a directory with no entries.
    fn is_dir_empty(&self, path: &Path) -> KitResult<bool>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> KitResult<()>;

    /// Files directly inside `dir` whose extension is `extension`.
    ///
    /// A missing `dir` yields an empty list.
    fn list_files(&self, dir: &Path, extension: &str) -> KitResult<Vec<PathBuf>>;
}

/// Port for bootstrapping a version-control repository.
///
/// Implemented by `conceptual_adapters::GitCli`.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Name of the underlying tool, used in messages.
    fn name(&self) -> &'static str;

    /// Initialize a repository rooted at `dir`.
    fn init_repository(&self, dir: &Path) -> KitResult<()>;
}

/// Port for discovering external programs.
///
/// Implemented by `conceptual_adapters::PathToolProbe` (`PATH` lookup).
#[cfg_attr(test, mockall::automock)]
pub trait ToolProbe: Send + Sync {
    /// Full path to `program`, if it can be found.
    fn find(&self, program: &str) -> Option<PathBuf>;
}

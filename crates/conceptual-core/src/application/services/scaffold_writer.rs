//! Scaffold Writer - the filesystem side of `init`.
//!
//! Every operation is idempotent and fails on its own: a missing source is
//! reported as [`Installed::NotFound`], never as an error, so one absent
//! resource cannot abort the whole run.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, ResourceLocator,
        ports::{Filesystem, VersionControl},
    },
    domain::ResourceKind,
    error::KitResult,
};

/// Result of copying a bundled resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Installed {
    /// Copied from `source`.
    Copied { source: PathBuf },
    /// Nothing to copy; `searched` is where the source was expected.
    NotFound { searched: PathBuf },
    /// Source and destination are the same entry, left untouched.
    InPlace { path: PathBuf },
}

impl Installed {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }
}

/// Materializes scaffold content through the [`Filesystem`] port.
pub struct ScaffoldWriter<'a> {
    fs: &'a dyn Filesystem,
    locator: &'a ResourceLocator,
}

impl<'a> ScaffoldWriter<'a> {
    pub fn new(fs: &'a dyn Filesystem, locator: &'a ResourceLocator) -> Self {
        Self { fs, locator }
    }

    /// Replace `dst` with a copy of `src`.
    ///
    /// An existing `dst` is removed first (force-replace, never merged),
    /// unless it is `src` itself.
    pub fn copy_tree(&self, src: &Path, dst: &Path) -> KitResult<Installed> {
        if let Some(done) = self.precheck(src, dst) {
            return Ok(done);
        }

        if self.fs.exists(dst) {
            debug!(path = %dst.display(), "Removing previous copy");
            self.fs.remove_dir_all(dst)?;
        }

        self.fs.copy_dir_all(src, dst)?;
        Ok(Installed::Copied {
            source: src.to_path_buf(),
        })
    }

    /// Copy a single file, overwriting `dst`.
    pub fn copy_file(&self, src: &Path, dst: &Path) -> KitResult<Installed> {
        if let Some(done) = self.precheck(src, dst) {
            return Ok(done);
        }

        self.fs.copy_file(src, dst)?;
        Ok(Installed::Copied {
            source: src.to_path_buf(),
        })
    }

    /// Outcome decided before touching `dst`: a missing source, or a
    /// source that already is the destination.
    fn precheck(&self, src: &Path, dst: &Path) -> Option<Installed> {
        if !self.fs.exists(src) {
            return Some(Installed::NotFound {
                searched: src.to_path_buf(),
            });
        }
        if self.fs.same_location(src, dst) {
            debug!(path = %src.display(), "Source is the destination, not copying");
            return Some(Installed::InPlace {
                path: src.to_path_buf(),
            });
        }
        None
    }

    /// Create `path` (and parents) unless it already exists.
    pub fn ensure_empty_dir(&self, path: &Path) -> KitResult<()> {
        if self.fs.exists(path) {
            return Ok(());
        }
        self.fs.create_dir_all(path)
    }

    pub fn write_text(&self, path: &Path, content: &str) -> KitResult<()> {
        self.fs.write_file(path, content)
    }

    /// Locate `kind` and copy it to `dst`.
    ///
    /// Directory kinds are force-replaced with [`Self::copy_tree`]; file kinds
    /// go through [`Self::copy_file`].
    #[instrument(skip(self), fields(resource = %kind))]
    pub fn install(&self, kind: ResourceKind, dst: &Path) -> KitResult<Installed> {
        let src = self.locator.locate(kind, self.fs);
        let installed = if kind.is_file() {
            self.copy_file(&src, dst)?
        } else {
            self.copy_tree(&src, dst)?
        };

        if installed.is_copied() {
            info!(from = %src.display(), to = %dst.display(), "Installed resource");
        }
        Ok(installed)
    }

    /// Locate `kind` (a directory resource) and copy one member file out of it.
    #[instrument(skip(self), fields(resource = %kind))]
    pub fn install_member(
        &self,
        kind: ResourceKind,
        member: &str,
        dst_dir: &Path,
    ) -> KitResult<Installed> {
        let src = self.locator.locate(kind, self.fs).join(member);
        self.copy_file(&src, &dst_dir.join(member))
    }

    /// Initialize a repository in `dir`.
    ///
    /// Errors come back as [`ApplicationError::VersionControlFailed`]; the
    /// caller decides whether that is fatal (for `init` it never is).
    pub fn bootstrap_version_control(
        &self,
        vcs: &dyn VersionControl,
        dir: &Path,
    ) -> KitResult<()> {
        vcs.init_repository(dir).map_err(|e| {
            ApplicationError::VersionControlFailed {
                tool: vcs.name(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Number of `*.md` command files directly inside `dir`.
    pub fn count_commands(&self, dir: &Path) -> KitResult<usize> {
        Ok(self.fs.list_files(dir, "md")?.len())
    }
}

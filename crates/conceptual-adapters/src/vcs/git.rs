//! `git` command-line adapter.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::{debug, instrument};

use conceptual_core::{
    application::{ApplicationError, ports::VersionControl},
    error::KitResult,
};

/// Why running `git` failed.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

impl From<GitError> for ApplicationError {
    fn from(e: GitError) -> Self {
        ApplicationError::VersionControlFailed {
            tool: "git",
            reason: e.to_string(),
        }
    }
}

/// Runs the `git` executable found on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific executable instead of `git` from `PATH`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, dir: &Path, args: &[&str]) -> Result<(), GitError> {
        let output = Command::new(&self.program)
            .current_dir(dir)
            .args(args)
            .output()
            .map_err(|source| GitError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(
            stdout = %String::from_utf8_lossy(&output.stdout).trim(),
            "git finished"
        );
        Ok(())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn name(&self) -> &'static str {
        "git"
    }

    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn init_repository(&self, dir: &Path) -> KitResult<()> {
        self.run(dir, &["init"])
            .map_err(|e| ApplicationError::from(e).into())
    }
}

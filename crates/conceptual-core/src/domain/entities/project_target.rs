use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// The directory a scaffold is written into, with the name used to render it.
///
/// Resolution is pure: the caller supplies the working directory, nothing
/// here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTarget {
    name: String,
    path: PathBuf,
    in_place: bool,
}

impl ProjectTarget {
    /// Resolve the target from the positional name and the `--here` flag.
    ///
    /// - `--here` or a name of exactly `.` → `cwd`, named after its base name
    /// - any other name → `cwd/<name>`
    /// - neither → [`DomainError::MissingProjectName`]
    pub fn resolve(name: Option<&str>, here: bool, cwd: &Path) -> Result<Self, DomainError> {
        if here || name == Some(".") {
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| DomainError::InvalidProjectName {
                    name: cwd.display().to_string(),
                    reason: "current directory has no usable base name".into(),
                })?;

            return Ok(Self {
                name: dir_name.to_string(),
                path: cwd.to_path_buf(),
                in_place: true,
            });
        }

        let name = name.ok_or(DomainError::MissingProjectName)?;
        validate_project_name(name)?;

        Ok(Self {
            name: name.to_string(),
            path: cwd.join(name),
            in_place: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` when scaffolding into the working directory itself.
    pub fn in_place(&self) -> bool {
        self.in_place
    }

    /// Directory the user should `cd` into after initialization.
    pub fn cd_hint(&self) -> &str {
        if self.in_place { "." } else { &self.name }
    }
}

fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name == ".." {
        return Err(invalid("name cannot refer to the parent directory"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    Ok(())
}

//! Check Service - report on the local environment.

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ResourceLocator,
        ports::{Filesystem, ToolProbe},
    },
    domain::{CheckReport, CheckRow, CheckStatus, ResourceKind, RuntimeVersion},
};

/// Oldest toolchain the kit is supported on.
pub const MINIMUM_RUNTIME: RuntimeVersion = RuntimeVersion::new(1, 85, 0);

pub const RUNTIME_COMPONENT: &str = "Rust toolchain";

/// Optional external programs: (row label, program, note when absent).
const OPTIONAL_TOOLS: [(&str, &str, &str); 2] = [
    (
        "Pandoc (PDF generation)",
        "pandoc",
        "Optional - install for PDF export",
    ),
    ("Git", "git", "Optional - for version control"),
];

/// Bundled resources verified by `check`, rows labelled by [`ResourceKind::label`].
const CHECKED_RESOURCES: [ResourceKind; 3] = [
    ResourceKind::Templates,
    ResourceKind::Examples,
    ResourceKind::AssistantCommands,
];

pub struct CheckService {
    filesystem: Box<dyn Filesystem>,
    tools: Box<dyn ToolProbe>,
    locator: ResourceLocator,
    runtime_version: String,
}

impl CheckService {
    /// `runtime_version` is the raw toolchain banner, e.g.
    /// `rustc 1.85.0 (4d91de4e4 2025-02-17)`.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        tools: Box<dyn ToolProbe>,
        locator: ResourceLocator,
        runtime_version: impl Into<String>,
    ) -> Self {
        Self {
            filesystem,
            tools,
            locator,
            runtime_version: runtime_version.into(),
        }
    }

    #[instrument(skip(self))]
    pub fn check(&self) -> CheckReport {
        let mut rows = Vec::with_capacity(1 + OPTIONAL_TOOLS.len() + CHECKED_RESOURCES.len());

        let (runtime_row, runtime_ok) = self.runtime_row();
        rows.push(runtime_row);

        for (component, program, absent_note) in OPTIONAL_TOOLS {
            let row = match self.tools.find(program) {
                Some(path) => {
                    debug!(program, path = %path.display(), "Tool found");
                    CheckRow::new(component, CheckStatus::Ok, "Installed")
                }
                None => CheckRow::new(component, CheckStatus::Optional, absent_note),
            };
            rows.push(row);
        }

        let mut resources_missing = false;
        for kind in CHECKED_RESOURCES {
            let component = kind.label();
            let path = self.locator.locate(kind, self.filesystem.as_ref());
            let row = if self.filesystem.exists(&path) {
                CheckRow::new(
                    component,
                    CheckStatus::Ok,
                    format!("Found at {}", path.display()),
                )
            } else {
                // Only templates and examples count towards "reinstall".
                if kind != ResourceKind::AssistantCommands {
                    resources_missing = true;
                }
                CheckRow::new(component, CheckStatus::Missing, "Not found")
            };
            rows.push(row);
        }

        CheckReport {
            rows,
            runtime_ok,
            resources_missing,
        }
    }

    fn runtime_row(&self) -> (CheckRow, bool) {
        match self.runtime_version.parse::<RuntimeVersion>() {
            Ok(version) if version.meets(MINIMUM_RUNTIME) => (
                CheckRow::new(
                    RUNTIME_COMPONENT,
                    CheckStatus::Ok,
                    format!("Version {version} (OK)"),
                ),
                true,
            ),
            Ok(version) => (
                CheckRow::new(
                    RUNTIME_COMPONENT,
                    CheckStatus::Failed,
                    format!("Version {version} (Need {MINIMUM_RUNTIME}+)"),
                ),
                false,
            ),
            Err(e) => {
                warn!(error = %e, "Could not determine toolchain version");
                (
                    CheckRow::new(
                        RUNTIME_COMPONENT,
                        CheckStatus::Optional,
                        format!("Unknown version '{}'", self.runtime_version),
                    ),
                    true,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        InstallLayout,
        ports::{MockFilesystem, MockToolProbe},
    };
    use std::path::{Path, PathBuf};

    fn locator() -> ResourceLocator {
        ResourceLocator::new(&InstallLayout {
            dev_root: PathBuf::from("/kit"),
            env_prefix: None,
            global_prefix: PathBuf::from("/usr"),
        })
    }

    fn all_resources() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p.starts_with("/kit"));
        fs
    }

    fn no_tools() -> MockToolProbe {
        let mut tools = MockToolProbe::new();
        tools.expect_find().returning(|_| None);
        tools
    }

    fn service(fs: MockFilesystem, tools: MockToolProbe, version: &str) -> CheckService {
        CheckService::new(Box::new(fs), Box::new(tools), locator(), version)
    }

    #[test]
    fn current_toolchain_passes() {
        let report = service(all_resources(), no_tools(), "rustc 1.86.0 (05f9846f8 2025-03-31)")
            .check();
        assert!(report.runtime_ok);
        assert!(!report.resources_missing);
        let row = report.row(RUNTIME_COMPONENT).unwrap();
        assert_eq!(row.status, CheckStatus::Ok);
        assert_eq!(row.note, "Version 1.86.0 (OK)");
    }

    #[test]
    fn old_toolchain_fails() {
        let report = service(all_resources(), no_tools(), "rustc 1.70.0").check();
        assert!(!report.runtime_ok);
        assert_eq!(
            report.row(RUNTIME_COMPONENT).unwrap().status,
            CheckStatus::Failed
        );
    }

    #[test]
    fn minimum_is_inclusive() {
        let report = service(all_resources(), no_tools(), "1.85.0").check();
        assert!(report.runtime_ok);
    }

    #[test]
    fn unparseable_version_does_not_fail() {
        let report = service(all_resources(), no_tools(), "unknown").check();
        assert!(report.runtime_ok);
        assert_eq!(
            report.row(RUNTIME_COMPONENT).unwrap().status,
            CheckStatus::Optional
        );
    }

    #[test]
    fn tools_are_optional() {
        let mut tools = MockToolProbe::new();
        tools
            .expect_find()
            .returning(|p| (p == "git").then(|| PathBuf::from("/usr/bin/git")));

        let report = service(all_resources(), tools, "rustc 1.85.0").check();
        assert_eq!(report.row("Git").unwrap().status, CheckStatus::Ok);
        assert_eq!(
            report.row("Pandoc (PDF generation)").unwrap().status,
            CheckStatus::Optional
        );
        assert!(report.runtime_ok);
    }

    #[test]
    fn missing_resources_are_flagged_not_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/kit/.claude"));

        let report = service(fs, no_tools(), "rustc 1.85.0").check();
        assert!(report.resources_missing);
        assert!(report.runtime_ok);
        assert_eq!(report.row("Templates").unwrap().status, CheckStatus::Missing);
        assert_eq!(report.row("Examples").unwrap().note, "Not found");
        assert_eq!(report.row("Claude Commands").unwrap().status, CheckStatus::Ok);
    }

    #[test]
    fn missing_commands_alone_do_not_flag_reinstall() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.starts_with("/kit") && !p.starts_with("/kit/.claude"));

        let report = service(fs, no_tools(), "rustc 1.85.0").check();
        assert!(!report.resources_missing);
        assert_eq!(
            report.row("Claude Commands").unwrap().status,
            CheckStatus::Missing
        );
    }

    #[test]
    fn rows_follow_fixed_order() {
        let report = service(all_resources(), no_tools(), "rustc 1.85.0").check();
        let components: Vec<_> = report.rows.iter().map(|r| r.component.as_str()).collect();
        assert_eq!(
            components,
            vec![
                RUNTIME_COMPONENT,
                "Pandoc (PDF generation)",
                "Git",
                "Templates",
                "Examples",
                "Claude Commands",
            ]
        );
    }
}

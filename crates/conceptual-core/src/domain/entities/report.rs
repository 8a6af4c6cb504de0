//! Structured results handed back to the caller for rendering.
//!
//! Services never print. They return these values and the CLI decides how
//! to show them (human text, plain text or JSON).

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{Assistant, ScriptKind};

// ── init ──────────────────────────────────────────────────────────────────────

/// One stage of the `init` pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaffoldStep {
    CreateTarget,
    Templates,
    Examples,
    Docs,
    AssistantCommands,
    AssistantConfig,
    Guide,
    VersionControl,
    IgnoreFile,
    Readme,
}

impl ScaffoldStep {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CreateTarget => "project directory",
            Self::Templates => "templates",
            Self::Examples => "examples",
            Self::Docs => "docs directory",
            Self::AssistantCommands => "Claude Code slash commands (.claude/)",
            Self::AssistantConfig => "GitHub Copilot configuration (.github/)",
            Self::Guide => "conceptual modeling guide",
            Self::VersionControl => "git repository",
            Self::IgnoreFile => ".gitignore",
            Self::Readme => "README.md",
        }
    }
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// The step wrote what it was supposed to.
    Done,
    /// The step was not requested (e.g. `--no-git`) or had nothing to copy.
    Skipped,
    /// The step failed; the pipeline carried on.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: ScaffoldStep,
    pub status: StepStatus,
    pub detail: String,
}

impl StepOutcome {
    pub fn done(step: ScaffoldStep, detail: impl Into<String>) -> Self {
        Self {
            step,
            status: StepStatus::Done,
            detail: detail.into(),
        }
    }

    pub fn skipped(step: ScaffoldStep, detail: impl Into<String>) -> Self {
        Self {
            step,
            status: StepStatus::Skipped,
            detail: detail.into(),
        }
    }

    pub fn warning(step: ScaffoldStep, detail: impl Into<String>) -> Self {
        Self {
            step,
            status: StepStatus::Warning,
            detail: detail.into(),
        }
    }
}

/// Everything `init` did, in order.
#[derive(Debug, Clone, Serialize)]
pub struct InitReport {
    pub project_name: String,
    pub target: PathBuf,
    pub assistant: Assistant,
    pub script: ScriptKind,
    pub steps: Vec<StepOutcome>,
    /// Number of `*.md` slash commands installed, when the bundle was found.
    pub command_count: Option<usize>,
    pub next_steps: Vec<String>,
}

impl InitReport {
    pub fn outcome(&self, step: ScaffoldStep) -> Option<&StepOutcome> {
        self.steps.iter().find(|o| o.step == step)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .filter(|o| o.status == StepStatus::Warning)
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }
}

// ── check ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Present and usable.
    Ok,
    /// Optional component that is absent.
    Optional,
    /// Bundled resource that could not be located.
    Missing,
    /// Requirement not met.
    Failed,
}

impl CheckStatus {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Ok => "\u{2713}",                     // ✓
            Self::Optional => "\u{25cb}",               // ○
            Self::Missing | Self::Failed => "\u{2717}", // ✗
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRow {
    pub component: String,
    pub status: CheckStatus,
    pub note: String,
}

impl CheckRow {
    pub fn new(component: impl Into<String>, status: CheckStatus, note: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status,
            note: note.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub rows: Vec<CheckRow>,
    /// `false` only when the runtime is known to be below the minimum.
    pub runtime_ok: bool,
    /// Templates or examples could not be located.
    pub resources_missing: bool,
}

impl CheckReport {
    pub fn row(&self, component: &str) -> Option<&CheckRow> {
        self.rows.iter().find(|r| r.component == component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> InitReport {
        InitReport {
            project_name: "shop".into(),
            target: PathBuf::from("/w/shop"),
            assistant: Assistant::CursorAgent,
            script: ScriptKind::Ps,
            steps: vec![
                StepOutcome::done(ScaffoldStep::CreateTarget, "/w/shop"),
                StepOutcome::warning(ScaffoldStep::Templates, "Templates not found"),
                StepOutcome::skipped(ScaffoldStep::VersionControl, "--no-git"),
            ],
            command_count: None,
            next_steps: vec!["cd shop".into()],
        }
    }

    #[test]
    fn warnings_are_filtered_in_order() {
        let report = report();
        assert!(report.has_warnings());
        let steps: Vec<_> = report.warnings().map(|o| o.step).collect();
        assert_eq!(steps, vec![ScaffoldStep::Templates]);
        assert_eq!(
            report.outcome(ScaffoldStep::VersionControl).map(|o| o.status),
            Some(StepStatus::Skipped)
        );
        assert!(report.outcome(ScaffoldStep::Readme).is_none());
    }

    #[test]
    fn json_uses_stable_names() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["assistant"], "cursor-agent");
        assert_eq!(json["script"], "ps");
        assert_eq!(json["steps"][0]["step"], "create-target");
        assert_eq!(json["steps"][1]["status"], "warning");
        assert!(json["command_count"].is_null());
    }

    #[test]
    fn check_row_lookup() {
        let report = CheckReport {
            rows: vec![CheckRow::new("Git", CheckStatus::Optional, "absent")],
            runtime_ok: true,
            resources_missing: false,
        };
        assert_eq!(report.row("Git").map(|r| r.status.symbol()), Some("\u{25cb}"));
        assert!(report.row("Pandoc").is_none());
    }
}

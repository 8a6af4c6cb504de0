//! Init Service - scaffold a new conceptual-modeling project.
//!
//! The pipeline is fixed. Only two things abort it: the non-empty target
//! guard (checked before anything is written) and failure to create the
//! target directory. Every later step records a [`StepOutcome`] and the run
//! carries on.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, Installed, ResourceLocator, ScaffoldWriter,
        ports::{Filesystem, VersionControl},
    },
    domain::{
        Assistant, InitReport, ProjectTarget, RenderContext, ResourceKind, ScaffoldStep,
        ScriptKind, StepOutcome, content,
    },
    error::KitResult,
};

/// Parameters for one `init` run.
#[derive(Debug, Clone)]
pub struct InitRequest {
    pub target: ProjectTarget,
    pub assistant: Assistant,
    /// Reserved; recorded in the report only.
    pub script: ScriptKind,
    pub force: bool,
    pub init_git: bool,
    /// Reserved; accepted and ignored.
    pub github_token: Option<String>,
}

impl InitRequest {
    pub fn new(target: ProjectTarget) -> Self {
        Self {
            target,
            assistant: Assistant::default(),
            script: ScriptKind::default(),
            force: false,
            init_git: true,
            github_token: None,
        }
    }
}

pub struct InitService {
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
    locator: ResourceLocator,
}

impl InitService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
        locator: ResourceLocator,
    ) -> Self {
        Self {
            filesystem,
            vcs,
            locator,
        }
    }

    /// Run the full pipeline for `request`.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::TargetNotEmpty`] when the target has content and
    ///   `force` is not set. Nothing has been written in that case.
    /// - Any filesystem error from creating the target directory.
    #[instrument(
        skip(self, request),
        fields(project = %request.target.name(), assistant = %request.assistant)
    )]
    pub fn initialize(&self, request: InitRequest) -> KitResult<InitReport> {
        let target = request.target.path();
        if request.github_token.is_some() {
            debug!("GitHub token supplied; not used");
        }

        self.guard_target(target, request.force)?;

        let writer = ScaffoldWriter::new(self.filesystem.as_ref(), &self.locator);
        let mut steps = Vec::with_capacity(10);

        // 1. Hard failure: nothing else can be written without it.
        writer.ensure_empty_dir(target)?;
        steps.push(StepOutcome::done(
            ScaffoldStep::CreateTarget,
            target.display().to_string(),
        ));

        // 2-3. Resource trees, force-replaced.
        steps.push(copied_or_warn(
            ScaffoldStep::Templates,
            ResourceKind::Templates,
            writer.install(ResourceKind::Templates, &target.join("templates")),
        ));
        steps.push(copied_or_warn(
            ScaffoldStep::Examples,
            ResourceKind::Examples,
            writer.install(ResourceKind::Examples, &target.join("examples")),
        ));

        // 4.
        let docs = target.join("docs");
        steps.push(match writer.ensure_empty_dir(&docs) {
            Ok(()) => StepOutcome::done(ScaffoldStep::Docs, docs.display().to_string()),
            Err(e) => StepOutcome::warning(ScaffoldStep::Docs, e.to_string()),
        });

        // 5. Assistant command bundle.
        let commands_dst = target.join(ResourceKind::AssistantCommands.relative_path());
        let installed = writer.install(ResourceKind::AssistantCommands, &commands_dst);
        let command_count = match &installed {
            Ok(Installed::Copied { .. } | Installed::InPlace { .. }) => {
                let count = writer
                    .count_commands(&commands_dst.join(content::COMMANDS_SUBDIR))
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "Could not count slash commands");
                        0
                    });
                Some(count)
            }
            _ => None,
        };
        steps.push(copied_or_warn(
            ScaffoldStep::AssistantCommands,
            ResourceKind::AssistantCommands,
            installed,
        ));

        // 6. Copilot configuration; the directory exists even without the file.
        steps.push(self.install_assistant_config(&writer, target));

        // 7.
        steps.push(copied_or_skip(
            ScaffoldStep::Guide,
            writer.install(
                ResourceKind::GuideDocument,
                &target.join(ResourceKind::GuideDocument.relative_path()),
            ),
        ));

        // 8. Version control, then the ignore file only if it worked.
        steps.extend(self.bootstrap_repository(&writer, target, request.init_git));

        // 9.
        let context = RenderContext::new(request.target.name(), request.assistant);
        steps.push(
            match writer.write_text(&target.join("README.md"), &content::readme(&context)) {
                Ok(()) => StepOutcome::done(ScaffoldStep::Readme, "README.md"),
                Err(e) => StepOutcome::warning(ScaffoldStep::Readme, e.to_string()),
            },
        );

        let report = InitReport {
            project_name: request.target.name().to_string(),
            target: target.to_path_buf(),
            assistant: request.assistant,
            script: request.script,
            next_steps: content::next_steps(&request.target, request.assistant),
            steps,
            command_count,
        };

        info!(
            target = %target.display(),
            warnings = report.warnings().count(),
            "Project initialized"
        );
        Ok(report)
    }

    fn guard_target(&self, target: &Path, force: bool) -> KitResult<()> {
        if !self.filesystem.exists(target) {
            return Ok(());
        }
        if self.filesystem.is_dir_empty(target)? {
            return Ok(());
        }
        if force {
            warn!(path = %target.display(), "Target not empty, continuing with --force");
            return Ok(());
        }
        Err(ApplicationError::TargetNotEmpty {
            path: target.to_path_buf(),
        }
        .into())
    }

    fn install_assistant_config(&self, writer: &ScaffoldWriter<'_>, target: &Path) -> StepOutcome {
        let step = ScaffoldStep::AssistantConfig;
        let github_dst = target.join(ResourceKind::AssistantConfig.relative_path());
        if let Err(e) = writer.ensure_empty_dir(&github_dst) {
            return StepOutcome::warning(step, e.to_string());
        }
        copied_or_skip(
            step,
            writer.install_member(
                ResourceKind::AssistantConfig,
                content::INSTRUCTIONS_FILE,
                &github_dst,
            ),
        )
    }

    fn bootstrap_repository(
        &self,
        writer: &ScaffoldWriter<'_>,
        target: &Path,
        init_git: bool,
    ) -> Vec<StepOutcome> {
        if !init_git {
            return vec![
                StepOutcome::skipped(ScaffoldStep::VersionControl, "--no-git"),
                StepOutcome::skipped(ScaffoldStep::IgnoreFile, "--no-git"),
            ];
        }

        if let Err(e) = writer.bootstrap_version_control(self.vcs.as_ref(), target) {
            warn!(error = %e, "Could not initialize repository");
            return vec![
                StepOutcome::warning(ScaffoldStep::VersionControl, e.to_string()),
                StepOutcome::skipped(ScaffoldStep::IgnoreFile, "no repository"),
            ];
        }

        let ignore = match writer.write_text(&target.join(".gitignore"), content::GITIGNORE) {
            Ok(()) => StepOutcome::done(ScaffoldStep::IgnoreFile, ".gitignore"),
            Err(e) => StepOutcome::warning(ScaffoldStep::IgnoreFile, e.to_string()),
        };
        vec![
            StepOutcome::done(ScaffoldStep::VersionControl, self.vcs.name()),
            ignore,
        ]
    }
}

/// Missing resource trees are worth a warning.
fn copied_or_warn(
    step: ScaffoldStep,
    kind: ResourceKind,
    result: KitResult<Installed>,
) -> StepOutcome {
    match result {
        Ok(Installed::Copied { source }) => {
            StepOutcome::done(step, source.display().to_string())
        }
        Ok(Installed::InPlace { path }) => in_place(step, &path),
        Ok(Installed::NotFound { searched }) => {
            warn!(resource = %kind, searched = %searched.display(), "Resource not found");
            StepOutcome::warning(
                step,
                format!("{} not found (searched {})", kind.label(), searched.display()),
            )
        }
        Err(e) => StepOutcome::warning(step, e.to_string()),
    }
}

/// Missing single files are only noted.
fn copied_or_skip(step: ScaffoldStep, result: KitResult<Installed>) -> StepOutcome {
    match result {
        Ok(Installed::Copied { source }) => {
            StepOutcome::done(step, source.display().to_string())
        }
        Ok(Installed::InPlace { path }) => in_place(step, &path),
        Ok(Installed::NotFound { searched }) => {
            debug!(searched = %searched.display(), "Optional file not found");
            StepOutcome::skipped(step, format!("not found at {}", searched.display()))
        }
        Err(e) => StepOutcome::warning(step, e.to_string()),
    }
}

/// Running inside the kit's own tree: the resource is already in place.
fn in_place(step: ScaffoldStep, path: &Path) -> StepOutcome {
    StepOutcome::skipped(step, format!("already in place at {}", path.display()))
}

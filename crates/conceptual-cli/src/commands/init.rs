//! `conceptual init`: scaffold a conceptual-modeling project.

use std::str::FromStr;

use conceptual_adapters::{GitCli, LocalFilesystem};
use conceptual_core::{
    application::{InitRequest, InitService},
    domain::{
        Assistant, InitReport, ProjectTarget, ScaffoldStep, ScriptKind, StepOutcome, StepStatus,
    },
    error::KitError,
};
use tracing::{debug, instrument};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(here = args.here, force = args.force))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.debug {
        debug!("Debug mode enabled");
    }

    let cwd = std::env::current_dir().with_cli_context(|| "reading the current directory")?;
    let request = build_request(&args, &config, &cwd)?;
    let debug_output = args.debug;

    let service = InitService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GitCli::new()),
        super::resource_locator(&config),
    );
    let report = service.initialize(request)?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }
    render(&report, &output, debug_output)
}

/// Merge flags with configured defaults into a core request.
fn build_request(
    args: &InitArgs,
    config: &AppConfig,
    cwd: &std::path::Path,
) -> CliResult<InitRequest> {
    let target = ProjectTarget::resolve(args.project_name.as_deref(), args.here, cwd)
        .map_err(KitError::from)?;

    let assistant: Assistant = match args.ai {
        Some(ai) => ai.into(),
        None => configured(config.defaults.ai.as_deref(), "defaults.ai")?,
    };
    let script: ScriptKind = match args.script {
        Some(script) => script.into(),
        None => configured(config.defaults.script.as_deref(), "defaults.script")?,
    };

    let mut request = InitRequest::new(target);
    request.assistant = assistant;
    request.script = script;
    request.force = args.force;
    request.init_git = !args.no_git && config.defaults.git;
    request.github_token = args.github_token.clone();
    Ok(request)
}

/// Parse a configured default, falling back to the type's own default.
fn configured<T>(value: Option<&str>, key: &str) -> CliResult<T>
where
    T: FromStr + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        None => Ok(T::default()),
        Some(raw) => raw.parse().map_err(|e: T::Err| CliError::ConfigError {
            message: format!("{key}: {e}"),
            source: Some(Box::new(e)),
        }),
    }
}

fn render(report: &InitReport, output: &OutputManager, debug: bool) -> CliResult<()> {
    output.header("Initializing Conceptual Model Kit")?;
    output.print(&format!("Project: {}", report.project_name))?;
    output.print(&format!("AI Assistant: {}", report.assistant.display_name()))?;
    output.print(&format!("Script Type: {}", report.script))?;
    output.print(&format!("Location: {}", report.target.display()))?;
    output.print("")?;

    for outcome in &report.steps {
        render_step(outcome, report, output, debug)?;
    }

    output.print("")?;
    output.success("Project initialized successfully!")?;
    output.print("")?;
    output.print("Next steps:")?;
    for (i, step) in report.next_steps.iter().enumerate() {
        output.print(&format!("  {}. {}", i + 1, step))?;
    }
    output.print("")?;
    output.dim("Happy modeling!")?;
    Ok(())
}

fn render_step(
    outcome: &StepOutcome,
    report: &InitReport,
    output: &OutputManager,
    debug: bool,
) -> CliResult<()> {
    match outcome.status {
        StepStatus::Done => {
            if let Some(msg) = done_message(outcome.step, report) {
                output.success(&msg)?;
            }
            if let (ScaffoldStep::AssistantCommands, Some(count)) =
                (outcome.step, report.command_count)
            {
                output.print(&format!("  \u{2192} {count} slash commands available"))?;
            }
        }
        StepStatus::Warning => {
            output.warning(&format!("Warning: {}", outcome.detail))?;
        }
        StepStatus::Skipped if debug => {
            output.dim(&format!("Skipped {}: {}", outcome.step, outcome.detail))?;
        }
        StepStatus::Skipped => {}
    }
    Ok(())
}

fn done_message(step: ScaffoldStep, report: &InitReport) -> Option<String> {
    let target = &report.target;
    let msg = match step {
        // Already shown as "Location".
        ScaffoldStep::CreateTarget => return None,
        ScaffoldStep::Templates => {
            format!("Copied templates to {}", target.join("templates").display())
        }
        ScaffoldStep::Examples => {
            format!("Copied examples to {}", target.join("examples").display())
        }
        ScaffoldStep::Docs => "Created docs directory".into(),
        ScaffoldStep::AssistantCommands => format!("Installed {step}"),
        ScaffoldStep::AssistantConfig => format!("Created {step}"),
        ScaffoldStep::Guide => format!("Copied {step}"),
        ScaffoldStep::VersionControl => "Initialized git repository".into(),
        ScaffoldStep::IgnoreFile | ScaffoldStep::Readme => format!("Created {step}"),
    };
    Some(msg)
}

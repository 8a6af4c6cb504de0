//! `conceptual check`: report on toolchain, optional tools and resources.

use conceptual_adapters::{LocalFilesystem, PathToolProbe};
use conceptual_core::{
    application::{CheckService, MINIMUM_RUNTIME, RUNTIME_COMPONENT},
    domain::CheckReport,
};
use tracing::instrument;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Overrides the toolchain banner captured at build time.
pub const RUNTIME_VERSION_VAR: &str = "CONCEPTUAL_RUNTIME_VERSION";

#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = CheckService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(PathToolProbe::new()),
        super::resource_locator(&config),
        runtime_version(),
    );
    let report = service.check();

    if output.is_json() {
        output.json(&report)?;
    } else if !output.is_quiet() {
        render(&report, &output)?;
    }

    if !report.runtime_ok {
        return Err(CliError::RuntimeTooOld {
            found: runtime_found(&report),
            minimum: MINIMUM_RUNTIME.to_string(),
        });
    }

    if !output.is_json() {
        if report.resources_missing {
            output.warning("Some resources are missing. Try reinstalling the package.")?;
        }
        output.success("System check complete")?;
    }
    Ok(())
}

fn runtime_version() -> String {
    std::env::var(RUNTIME_VERSION_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| env!("CONCEPTUAL_RUSTC_VERSION").to_string())
}

/// Version shown in the failing runtime row, e.g. `1.70.0`.
fn runtime_found(report: &CheckReport) -> String {
    report
        .row(RUNTIME_COMPONENT)
        .and_then(|row| row.note.strip_prefix("Version "))
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or("unknown")
        .to_string()
}

fn render(report: &CheckReport, output: &OutputManager) -> CliResult<()> {
    output.header("Conceptual Kit - System Check")?;
    output.print("")?;

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            vec![
                row.component.clone(),
                row.status.symbol().to_string(),
                row.note.clone(),
            ]
        })
        .collect();
    output.table(&["Component", "Status", "Notes"], &rows)?;
    output.print("")?;
    Ok(())
}

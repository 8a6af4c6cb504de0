//! `conceptual version`.

use serde::Serialize;

use crate::{error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
}

const INFO: VersionInfo = VersionInfo {
    name: "Conceptual Kit",
    version: conceptual_core::VERSION,
};

pub fn execute(output: OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&INFO)?;
        return Ok(());
    }
    output.result(&banner())?;
    Ok(())
}

fn banner() -> String {
    format!("{} version {}", INFO.name, INFO.version)
}

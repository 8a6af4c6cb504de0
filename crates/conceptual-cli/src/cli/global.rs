//! Flags shared by every `conceptual` subcommand.
//!
//! Each flag here has a counterpart in the `[output]` section of the config
//! file or in the environment; the flag wins when both are given.

use clap::Args;
use std::path::PathBuf;

use crate::config::OutputConfig;

const HEADING: &str = "Global Options";

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level for the kit's own crates, written to stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help_heading = HEADING,
        help = "Show more log output on stderr (-v, -vv, -vvv)",
        long_help = "Log level for conceptual's diagnostics on stderr:
    (none)  - warnings, e.g. a missing bundled resource
    -v      - each init step as it runs
    -vv     - resource probes and git invocations
    -vvv    - everything
RUST_LOG takes precedence when set."
    )]
    pub verbose: u8,

    /// Only errors and explicitly requested results reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help_heading = HEADING,
        help = "Print only errors and command results"
    )]
    pub quiet: bool,

    /// Plain glyphs instead of ANSI colours; also `output.no_color`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help_heading = HEADING,
        help = "Disable colored output (also NO_COLOR)"
    )]
    pub no_color: bool,

    /// Config file read instead of the per-user `config.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "CONCEPTUAL_CONFIG",
        value_name = "FILE",
        help_heading = HEADING,
        help = "Read settings from FILE instead of the user config"
    )]
    pub config: Option<PathBuf>,

    /// Overrides `output.format`; `json` prints the init, check and
    /// version reports as JSON documents.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        value_name = "FORMAT",
        help_heading = HEADING,
        help = "Report format [default: output.format, else auto]"
    )]
    pub output_format: Option<OutputFormat>,
}

impl GlobalArgs {
    /// Format requested by the flag, else by the config file.
    pub fn format_preference(&self, config: &OutputConfig) -> OutputFormat {
        self.output_format
            .unwrap_or_else(|| OutputFormat::from_config(&config.format))
    }

    /// `true` when either the flag (or `NO_COLOR`) or `output.no_color`
    /// turns colour off.
    pub fn color_disabled(&self, config: &OutputConfig) -> bool {
        self.no_color || config.no_color
    }
}

/// How reports are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured glyphs and tables.
    Human,
    /// Same layout, no ANSI codes.
    Plain,
    /// One JSON document per command.
    Json,
}

impl OutputFormat {
    /// Config files spell the format as a string; unknown values mean auto.
    pub fn from_config(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "human" => Self::Human,
            "plain" => Self::Plain,
            "json" => Self::Json,
            _ => Self::Auto,
        }
    }
}

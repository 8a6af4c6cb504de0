//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `conceptual-core`
//! and `conceptual-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)        | Filter level       |
//! |----------------|--------------------|
//! | (none)         | WARN               |
//! | `-v`           | INFO               |
//! | `-vv`          | DEBUG              |
//! | `-vvv`         | TRACE              |
//! | `--quiet`      | ERROR              |
//! | `init --debug` | at least DEBUG     |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the derived level.
const CRATES: [&str; 3] = ["conceptual", "conceptual_core", "conceptual_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs, debug: bool) -> anyhow::Result<()> {
    let level = derive_level(args, debug);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_for(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter, quiet flag and `--debug` to a level string.
fn derive_level(args: &GlobalArgs, debug: bool) -> &'static str {
    let level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    match (debug, level) {
        (true, "error" | "warn" | "info") => "debug",
        _ => level,
    }
}

/// `conceptual=<level>,conceptual_core=<level>,...`
fn filter_for(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: None,
        }
    }

    #[test]
    fn level_quiet() {
        assert_eq!(derive_level(&args_with(0, true), false), "error");
    }

    #[test]
    fn level_default() {
        assert_eq!(derive_level(&args_with(0, false), false), "warn");
    }

    #[test]
    fn level_verbose_one() {
        assert_eq!(derive_level(&args_with(1, false), false), "info");
    }

    #[test]
    fn level_verbose_two() {
        assert_eq!(derive_level(&args_with(2, false), false), "debug");
    }

    #[test]
    fn level_verbose_three_plus() {
        assert_eq!(derive_level(&args_with(3, false), false), "trace");
        assert_eq!(derive_level(&args_with(10, false), false), "trace");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true), false), "error");
    }

    #[test]
    fn debug_raises_to_debug() {
        assert_eq!(derive_level(&args_with(0, false), true), "debug");
        assert_eq!(derive_level(&args_with(0, true), true), "debug");
    }

    #[test]
    fn debug_never_lowers_trace() {
        assert_eq!(derive_level(&args_with(3, false), true), "trace");
    }

    #[test]
    fn filter_covers_every_crate() {
        assert_eq!(
            filter_for("info"),
            "conceptual=info,conceptual_core=info,conceptual_adapters=info"
        );
    }
}

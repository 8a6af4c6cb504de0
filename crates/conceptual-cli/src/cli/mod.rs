//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use conceptual_core::domain::{Assistant, ScriptKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "conceptual",
    bin_name = "conceptual",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Conceptual Model Kit - scaffolding for conceptual modeling projects",
    long_about = "Sets up projects for writing conceptual models with AI assistants: \
                  templates, reference examples, slash commands and a modeling guide.",
    after_help = "EXAMPLES:\n\
        \x20 conceptual init my-project\n\
        \x20 conceptual init my-project --ai copilot\n\
        \x20 conceptual init --here\n\
        \x20 conceptual check\n\
        \x20 conceptual completions bash > ~/.local/share/bash-completion/completions/conceptual",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `true` when the subcommand asked for debug diagnostics.
    pub fn debug_requested(&self) -> bool {
        matches!(&self.command, Commands::Init(args) if args.debug)
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new conceptual modeling project.
    #[command(
        about = "Initialize a new conceptual modeling project",
        after_help = "EXAMPLES:\n\
            \x20 conceptual init my-project\n\
            \x20 conceptual init my-project --ai claude\n\
            \x20 conceptual init --here\n\
            \x20 conceptual init my-project --force\n\
            \x20 conceptual init my-project --ai gemini --no-git"
    )]
    Init(InitArgs),

    /// Check system requirements and installed resources.
    #[command(about = "Check system requirements")]
    Check,

    /// Show version information.
    #[command(about = "Show version information")]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 conceptual completions bash > ~/.local/share/bash-completion/completions/conceptual\n\
            \x20 conceptual completions zsh  > ~/.zfunc/_conceptual\n\
            \x20 conceptual completions fish > ~/.config/fish/completions/conceptual.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 conceptual config get defaults.ai\n\
            \x20 conceptual config list\n\
            \x20 conceptual config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `conceptual init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to create; `.` means the current directory.
    #[arg(value_name = "PROJECT_NAME", help = "Name of the project directory")]
    pub project_name: Option<String>,

    /// AI assistant the project is set up for.
    #[arg(
        long = "ai",
        value_name = "ASSISTANT",
        value_enum,
        help = "AI assistant to use [default: claude]"
    )]
    pub ai: Option<AiAssistant>,

    /// Script flavor for helper scripts.
    #[arg(
        long = "script",
        value_name = "TYPE",
        value_enum,
        help = "Script type [default: sh]"
    )]
    pub script: Option<ScriptType>,

    /// Scaffold into the current directory.
    #[arg(long = "here", help = "Initialize in current directory")]
    pub here: bool,

    /// Proceed even when the target already has content.
    #[arg(long = "force", help = "Force initialization even if directory is not empty")]
    pub force: bool,

    /// Do not create a git repository.
    #[arg(long = "no-git", help = "Skip git initialization")]
    pub no_git: bool,

    /// Show resource lookup details.
    #[arg(long = "debug", help = "Enable debug output")]
    pub debug: bool,

    /// Accepted for compatibility; not used.
    #[arg(
        long = "github-token",
        value_name = "TOKEN",
        help = "GitHub token for API requests"
    )]
    pub github_token: Option<String>,
}

/// Supported AI assistants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiAssistant {
    Claude,
    Copilot,
    #[value(alias = "cursor")]
    CursorAgent,
    Windsurf,
    Amp,
    Gemini,
}

impl From<AiAssistant> for Assistant {
    fn from(value: AiAssistant) -> Self {
        match value {
            AiAssistant::Claude => Self::Claude,
            AiAssistant::Copilot => Self::Copilot,
            AiAssistant::CursorAgent => Self::CursorAgent,
            AiAssistant::Windsurf => Self::Windsurf,
            AiAssistant::Amp => Self::Amp,
            AiAssistant::Gemini => Self::Gemini,
        }
    }
}

/// Supported script flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScriptType {
    Sh,
    Ps,
}

impl From<ScriptType> for ScriptKind {
    fn from(value: ScriptType) -> Self {
        match value {
            ScriptType::Sh => Self::Sh,
            ScriptType::Ps => Self::Ps,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `conceptual completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `conceptual config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.ai`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

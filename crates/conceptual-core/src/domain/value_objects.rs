//! Domain value objects: Assistant, ScriptKind, ResourceKind, RuntimeVersion.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Assistant ─────────────────────────────────────────────────────────────────

/// The AI assistant a project is configured for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Assistant {
    #[default]
    Claude,
    Copilot,
    CursorAgent,
    Windsurf,
    Amp,
    Gemini,
}

impl Assistant {
    pub const ALL: [Assistant; 6] = [
        Self::Claude,
        Self::Copilot,
        Self::CursorAgent,
        Self::Windsurf,
        Self::Amp,
        Self::Gemini,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Copilot => "copilot",
            Self::CursorAgent => "cursor-agent",
            Self::Windsurf => "windsurf",
            Self::Amp => "amp",
            Self::Gemini => "gemini",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Claude => "Claude Code",
            Self::Copilot => "GitHub Copilot",
            Self::CursorAgent => "Cursor Agent",
            Self::Windsurf => "Windsurf",
            Self::Amp => "Amp",
            Self::Gemini => "Gemini CLI",
        }
    }

    /// Command shown in next-step guidance for launching the assistant.
    ///
    /// Only Claude ships a known launcher; everything else gets a placeholder.
    pub const fn launch_command(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            _ => "your-ai",
        }
    }
}

impl fmt::Display for Assistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Assistant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "claude" => Ok(Self::Claude),
            "copilot" => Ok(Self::Copilot),
            "cursor-agent" | "cursor" => Ok(Self::CursorAgent),
            "windsurf" => Ok(Self::Windsurf),
            "amp" => Ok(Self::Amp),
            "gemini" => Ok(Self::Gemini),
            other => Err(DomainError::UnknownAssistant(other.to_string())),
        }
    }
}

// ── ScriptKind ────────────────────────────────────────────────────────────────

/// Shell flavour for helper scripts. Reserved: only shown in the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    #[default]
    Sh,
    Ps,
}

impl ScriptKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sh => "sh",
            Self::Ps => "ps",
        }
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sh" | "bash" => Ok(Self::Sh),
            "ps" | "powershell" => Ok(Self::Ps),
            other => Err(DomainError::UnknownScriptKind(other.to_string())),
        }
    }
}

// ── ResourceKind ──────────────────────────────────────────────────────────────

/// A category of bundled, read-only content shipped with the kit.
///
/// Every kind maps to exactly one path relative to an installation root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Templates,
    Examples,
    AssistantCommands,
    AssistantConfig,
    GuideDocument,
}

impl ResourceKind {
    pub const fn relative_path(&self) -> &'static str {
        match self {
            Self::Templates => "templates",
            Self::Examples => "examples",
            Self::AssistantCommands => ".claude",
            Self::AssistantConfig => ".github",
            Self::GuideDocument => "conceptual-modeling.md",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Templates => "Templates",
            Self::Examples => "Examples",
            Self::AssistantCommands => "Claude Commands",
            Self::AssistantConfig => "Copilot Instructions",
            Self::GuideDocument => "Conceptual Modeling Guide",
        }
    }

    /// `true` for single-file resources, `false` for directory trees.
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::GuideDocument)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path())
    }
}

// ── RuntimeVersion ────────────────────────────────────────────────────────────

/// A `major.minor.patch` triple.
///
/// Parsing takes the first numeric triple found in the input, so tool banners
/// such as `rustc 1.85.0 (4d91de4e4 2025-02-17)` parse directly. A missing
/// patch component defaults to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn meets(&self, minimum: RuntimeVersion) -> bool {
        *self >= minimum
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for RuntimeVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidVersion(s.to_string());

        let token = s
            .split_whitespace()
            .find(|t| t.starts_with(|c: char| c.is_ascii_digit()))
            .ok_or_else(invalid)?;

        // Drop pre-release / build suffixes: "1.86.0-nightly" -> "1.86.0"
        let core = token
            .split(|c: char| c == '-' || c == '+')
            .next()
            .unwrap_or(token);

        let mut parts = core.split('.');
        let mut next = |required: bool| -> Result<u32, DomainError> {
            match parts.next() {
                Some(p) => p.parse().map_err(|_| invalid()),
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };

        let major = next(true)?;
        let minor = next(true)?;
        let patch = next(false)?;

        Ok(Self::new(major, minor, patch))
    }
}

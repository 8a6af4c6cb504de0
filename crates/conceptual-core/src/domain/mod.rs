// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Conceptual Kit.
//!
//! Pure logic with no I/O: value objects, target resolution and the text
//! rendered into new projects. Filesystem, process and terminal concerns are
//! handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable values**: Domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod content;
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    CheckReport, CheckRow, CheckStatus, InitReport, ProjectTarget, RenderContext, ScaffoldStep,
    StepOutcome, StepStatus,
};

pub use error::DomainError;

pub use value_objects::{Assistant, ResourceKind, RuntimeVersion, ScriptKind};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn assistant_parses_correctly() {
        assert_eq!(Assistant::from_str("claude").unwrap(), Assistant::Claude);
        assert_eq!(
            Assistant::from_str("Cursor-Agent").unwrap(),
            Assistant::CursorAgent
        );
        assert!(matches!(
            Assistant::from_str("clippy"),
            Err(DomainError::UnknownAssistant(_))
        ));
    }

    #[test]
    fn assistant_round_trips_through_display() {
        for assistant in Assistant::ALL {
            assert_eq!(
                Assistant::from_str(&assistant.to_string()).unwrap(),
                assistant
            );
        }
    }

    #[test]
    fn default_assistant_is_claude() {
        assert_eq!(Assistant::default(), Assistant::Claude);
    }

    #[test]
    fn script_kind_parses_aliases() {
        assert_eq!(ScriptKind::from_str("sh").unwrap(), ScriptKind::Sh);
        assert_eq!(ScriptKind::from_str("PowerShell").unwrap(), ScriptKind::Ps);
        assert!(ScriptKind::from_str("fish").is_err());
    }

    #[test]
    fn resource_kinds_have_distinct_paths() {
        let kinds = [
            ResourceKind::Templates,
            ResourceKind::Examples,
            ResourceKind::AssistantCommands,
            ResourceKind::AssistantConfig,
            ResourceKind::GuideDocument,
        ];
        let mut paths: Vec<_> = kinds.iter().map(|k| k.relative_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), kinds.len());
        assert!(ResourceKind::GuideDocument.is_file());
        assert!(!ResourceKind::Templates.is_file());
    }

    // ========================================================================
    // RuntimeVersion Tests
    // ========================================================================

    #[test]
    fn version_parses_rustc_banner() {
        let v = RuntimeVersion::from_str("rustc 1.85.0 (4d91de4e4 2025-02-17)").unwrap();
        assert_eq!(v, RuntimeVersion::new(1, 85, 0));
    }

    #[test]
    fn version_parses_bare_and_nightly() {
        assert_eq!(
            RuntimeVersion::from_str("1.86.0-nightly").unwrap(),
            RuntimeVersion::new(1, 86, 0)
        );
        assert_eq!(
            RuntimeVersion::from_str("3.8").unwrap(),
            RuntimeVersion::new(3, 8, 0)
        );
    }

    #[test]
    fn version_rejects_garbage() {
        assert!(RuntimeVersion::from_str("unknown").is_err());
        assert!(RuntimeVersion::from_str("").is_err());
        assert!(RuntimeVersion::from_str("1").is_err());
        assert!(RuntimeVersion::from_str("1.x.0").is_err());
    }

    #[test]
    fn version_ordering() {
        let min = RuntimeVersion::new(1, 85, 0);
        assert!(RuntimeVersion::new(1, 85, 0).meets(min));
        assert!(RuntimeVersion::new(1, 90, 2).meets(min));
        assert!(RuntimeVersion::new(2, 0, 0).meets(min));
        assert!(!RuntimeVersion::new(1, 84, 9).meets(min));
        assert!(!RuntimeVersion::new(0, 99, 0).meets(min));
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn missing_name_suggests_here() {
        let err = DomainError::MissingProjectName;
        assert_eq!(err.category(), crate::error::ErrorCategory::Usage);
        assert!(err.suggestions().iter().any(|s| s.contains("--here")));
    }
}

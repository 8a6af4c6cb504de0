//! Conceptual Kit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Conceptual
//! Kit scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          conceptual-cli (CLI)           │
//! │     (Parses args, renders reports)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (InitService, CheckService)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, VersionControl, ToolProbe) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   conceptual-adapters (Infrastructure)  │
//! │  (LocalFilesystem, GitCli, PathToolProbe)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectTarget, Assistant, InitReport)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use conceptual_core::prelude::*;
//!
//! // 1. Resolve where the project goes
//! let target = ProjectTarget::resolve(Some("shop"), false, &cwd)?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = InitService::new(filesystem, vcs, ResourceLocator::new(&layout));
//! let report = service.initialize(InitRequest::new(target))?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CheckService, InitRequest, InitService, InstallLayout, ResourceLocator,
        ports::{Filesystem, ToolProbe, VersionControl},
    };
    pub use crate::domain::{
        Assistant, CheckReport, InitReport, ProjectTarget, ResourceKind, RuntimeVersion,
        ScaffoldStep, ScriptKind, StepStatus,
    };
    pub use crate::error::{KitError, KitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

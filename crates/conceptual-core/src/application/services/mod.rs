//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "initialize a project" or "check the
//! environment".

pub mod check_service;
pub mod init_service;
pub mod resource_locator;
pub mod scaffold_writer;

pub use check_service::{CheckService, MINIMUM_RUNTIME, RUNTIME_COMPONENT};
pub use init_service::{InitRequest, InitService};
pub use resource_locator::{InstallLayout, LayoutStrategy, ResourceLocator};
pub use scaffold_writer::{Installed, ScaffoldWriter};

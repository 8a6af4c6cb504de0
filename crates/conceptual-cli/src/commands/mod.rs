//! Command handlers, one module per subcommand.
//!
//! Handlers wire adapters into core services, then render the returned
//! report through the [`OutputManager`](crate::output::OutputManager).

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod version;

use conceptual_adapters::ProcessEnvironment;
use conceptual_core::application::ResourceLocator;

use crate::config::AppConfig;

/// Resource locator for this process, honouring `resources.root`.
fn resource_locator(config: &AppConfig) -> ResourceLocator {
    let layout = ProcessEnvironment::capture(config.resources.root.clone()).layout();
    ResourceLocator::new(&layout)
}

//! `PATH` lookup via the `which` crate.

use std::path::PathBuf;

use tracing::trace;

use conceptual_core::application::ports::ToolProbe;

/// Finds programs the way a shell would.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathToolProbe;

impl PathToolProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ToolProbe for PathToolProbe {
    fn find(&self, program: &str) -> Option<PathBuf> {
        let found = which::which(program).ok();
        trace!(program, found = ?found, "PATH lookup");
        found
    }
}

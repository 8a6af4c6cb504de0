//! Installation layout discovery from the running process.
//!
//! Reads the handful of environment variables and executable paths the
//! [`ResourceLocator`](conceptual_core::application::ResourceLocator) needs,
//! and nothing else. The lookup is split from the decision so the decision
//! can be tested without touching the real environment.

use std::path::{Path, PathBuf};

use tracing::debug;

use conceptual_core::application::InstallLayout;

/// Points the development layout at a kit checkout.
pub const HOME_VAR: &str = "CONCEPTUAL_KIT_HOME";

/// Isolated environment markers, in priority order.
pub const ENV_PREFIX_VARS: [&str; 2] = ["VIRTUAL_ENV", "CONDA_PREFIX"];

/// Prefix used when the executable's location says nothing useful.
pub const DEFAULT_GLOBAL_PREFIX: &str = "/usr/local";

/// Workspace root this crate was built from.
const BUILD_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../..");

/// Raw inputs to layout discovery.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvironment {
    /// Explicit resource root (configuration), wins over everything.
    pub root_override: Option<PathBuf>,
    /// Value of [`HOME_VAR`].
    pub kit_home: Option<PathBuf>,
    /// First non-empty value among [`ENV_PREFIX_VARS`].
    pub env_prefix: Option<PathBuf>,
    /// Path of the running executable.
    pub executable: Option<PathBuf>,
}

impl ProcessEnvironment {
    /// Capture the current process environment.
    pub fn capture(root_override: Option<PathBuf>) -> Self {
        let var = |name: &str| {
            std::env::var_os(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };

        Self {
            root_override,
            kit_home: var(HOME_VAR),
            env_prefix: ENV_PREFIX_VARS.iter().find_map(|&name| var(name)),
            executable: std::env::current_exe().ok(),
        }
    }

    /// Decide the layout.
    ///
    /// - dev root: override, else [`HOME_VAR`], else the build workspace
    /// - global prefix: `<prefix>` for an executable at `<prefix>/bin/<exe>`,
    ///   else [`DEFAULT_GLOBAL_PREFIX`]
    /// - environment prefix: only when it differs from the global prefix
    pub fn layout(&self) -> InstallLayout {
        let dev_root = self
            .root_override
            .clone()
            .or_else(|| self.kit_home.clone())
            .unwrap_or_else(|| PathBuf::from(BUILD_ROOT));

        let global_prefix = self
            .executable
            .as_deref()
            .and_then(prefix_of_executable)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GLOBAL_PREFIX));

        let env_prefix = self
            .env_prefix
            .clone()
            .filter(|prefix| *prefix != global_prefix);

        let layout = InstallLayout {
            dev_root,
            env_prefix,
            global_prefix,
        };
        debug!(?layout, "Install layout");
        layout
    }
}

/// `<prefix>/bin/<exe>` -> `<prefix>`.
fn prefix_of_executable(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

//! Resource Locator - find bundled resources across installation layouts.
//!
//! The kit ships its templates, examples and assistant bundles next to the
//! binary, but where "next to" is depends on how it was installed. Each
//! layout is a [`LayoutStrategy`]; the locator tries them in priority order
//! and the first candidate that exists wins.
//!
//! Absence is not an error. When nothing matches, the development-tree
//! candidate is returned so callers can say *where* they looked.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::{application::ports::Filesystem, domain::ResourceKind};

/// Directory under an installation prefix holding the kit's shared data.
pub const SHARE_DIR: &str = "share/conceptual_kit";

/// Base directories describing where the running tool is installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallLayout {
    /// Root of a development checkout (or an explicit override).
    pub dev_root: PathBuf,
    /// Prefix of the active isolated environment, if one is active.
    pub env_prefix: Option<PathBuf>,
    /// Prefix of the global installation.
    pub global_prefix: PathBuf,
}

impl InstallLayout {
    /// Strategies in probe order: development tree, isolated environment,
    /// global share.
    pub fn strategies(&self) -> Vec<LayoutStrategy> {
        let mut strategies = vec![LayoutStrategy::DevelopmentTree(self.dev_root.clone())];
        if let Some(prefix) = &self.env_prefix {
            strategies.push(LayoutStrategy::EnvironmentShare(prefix.clone()));
        }
        strategies.push(LayoutStrategy::GlobalShare(self.global_prefix.clone()));
        strategies
    }
}

/// One way of mapping a resource kind to a candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// `<root>/<resource>`
    DevelopmentTree(PathBuf),
    /// `<env-prefix>/share/conceptual_kit/<resource>`
    EnvironmentShare(PathBuf),
    /// `<global-prefix>/share/conceptual_kit/<resource>`
    GlobalShare(PathBuf),
}

impl LayoutStrategy {
    pub fn candidate(&self, kind: ResourceKind) -> PathBuf {
        match self {
            Self::DevelopmentTree(root) => root.join(kind.relative_path()),
            Self::EnvironmentShare(prefix) | Self::GlobalShare(prefix) => {
                prefix.join(SHARE_DIR).join(kind.relative_path())
            }
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::DevelopmentTree(_) => "dev",
            Self::EnvironmentShare(_) => "venv share",
            Self::GlobalShare(_) => "global share",
        }
    }
}

/// Resolves resource kinds to on-disk paths.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    strategies: Vec<LayoutStrategy>,
    fallback: PathBuf,
}

impl ResourceLocator {
    pub fn new(layout: &InstallLayout) -> Self {
        Self {
            strategies: layout.strategies(),
            fallback: layout.dev_root.clone(),
        }
    }

    /// First existing candidate for `kind`, else the development-tree path.
    ///
    /// Never fails; check the returned path's existence to tell the cases
    /// apart.
    pub fn locate(&self, kind: ResourceKind, fs: &dyn Filesystem) -> PathBuf {
        for strategy in &self.strategies {
            let candidate = strategy.candidate(kind);
            let exists = fs.exists(&candidate);
            debug!(
                resource = %kind,
                layout = strategy.label(),
                path = %candidate.display(),
                exists,
                "Probing resource location"
            );
            if exists {
                return candidate;
            }
        }

        let fallback = self.fallback_for(kind);
        debug!(resource = %kind, path = %fallback.display(), "Falling back to dev path");
        fallback
    }

    fn fallback_for(&self, kind: ResourceKind) -> PathBuf {
        self.fallback.join(kind.relative_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use std::path::Path;

    fn layout(env: bool) -> InstallLayout {
        InstallLayout {
            dev_root: PathBuf::from("/src/kit"),
            env_prefix: env.then(|| PathBuf::from("/venv")),
            global_prefix: PathBuf::from("/usr/local"),
        }
    }

    fn fs_with(existing: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p| existing.iter().any(|e| Path::new(e) == p));
        fs
    }

    #[test]
    fn strategies_skip_absent_environment() {
        assert_eq!(layout(false).strategies().len(), 2);
        let with_env = layout(true).strategies();
        assert_eq!(with_env.len(), 3);
        assert_eq!(
            with_env[1],
            LayoutStrategy::EnvironmentShare(PathBuf::from("/venv"))
        );
    }

    #[test]
    fn candidates_follow_priority_order() {
        let candidates: Vec<_> = layout(true)
            .strategies()
            .iter()
            .map(|s| s.candidate(ResourceKind::Templates))
            .collect();
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/src/kit/templates"),
                PathBuf::from("/venv/share/conceptual_kit/templates"),
                PathBuf::from("/usr/local/share/conceptual_kit/templates"),
            ]
        );
    }

    #[test]
    fn development_tree_wins_when_present() {
        let fs = fs_with(&[
            "/src/kit/examples",
            "/usr/local/share/conceptual_kit/examples",
        ]);
        let locator = ResourceLocator::new(&layout(true));
        assert_eq!(
            locator.locate(ResourceKind::Examples, &fs),
            PathBuf::from("/src/kit/examples")
        );
    }

    #[test]
    fn environment_share_beats_global() {
        let fs = fs_with(&[
            "/venv/share/conceptual_kit/.claude",
            "/usr/local/share/conceptual_kit/.claude",
        ]);
        let locator = ResourceLocator::new(&layout(true));
        assert_eq!(
            locator.locate(ResourceKind::AssistantCommands, &fs),
            PathBuf::from("/venv/share/conceptual_kit/.claude")
        );
    }

    #[test]
    fn global_share_used_last() {
        let fs = fs_with(&["/usr/local/share/conceptual_kit/conceptual-modeling.md"]);
        let locator = ResourceLocator::new(&layout(true));
        assert_eq!(
            locator.locate(ResourceKind::GuideDocument, &fs),
            PathBuf::from("/usr/local/share/conceptual_kit/conceptual-modeling.md")
        );
    }

    #[test]
    fn missing_everywhere_returns_dev_guess() {
        let fs = fs_with(&[]);
        let locator = ResourceLocator::new(&layout(true));
        let path = locator.locate(ResourceKind::Templates, &fs);
        assert_eq!(path, PathBuf::from("/src/kit/templates"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let fs = fs_with(&["/venv/share/conceptual_kit/templates"]);
        let locator = ResourceLocator::new(&layout(true));
        let first = locator.locate(ResourceKind::Templates, &fs);
        let second = locator.locate(ResourceKind::Templates, &fs);
        assert_eq!(first, second);
    }
}

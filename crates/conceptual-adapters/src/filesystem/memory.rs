//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use conceptual_core::{
    application::{ApplicationError, ports::Filesystem},
    error::KitResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and inspect
/// the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_with_parents(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn require_parent(&self, path: &Path) -> KitResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }

    fn has_children(&self, dir: &Path) -> bool {
        let child = |p: &&PathBuf| p.as_path() != dir && p.starts_with(dir);
        self.files.keys().any(|p| child(&p)) || self.directories.iter().any(|p| child(&p))
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir_with_parents(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Seed an empty directory (testing helper).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir_with_parents(path.as_ref());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files under `root`, sorted.
    pub fn files_under(&self, root: &Path) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| {
                inner
                    .files
                    .keys()
                    .filter(|p| p.starts_with(root))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn read(&self) -> KitResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn write(&self) -> KitResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> KitResult<()> {
        self.write()?.add_dir_with_parents(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KitResult<()> {
        let mut inner = self.write()?;
        inner.require_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> KitResult<()> {
        let mut inner = self.write()?;
        let content = inner.files.get(from).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such file".into(),
            }
        })?;
        inner.require_parent(to)?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> KitResult<()> {
        let mut inner = self.write()?;
        if !inner.directories.contains(from) {
            return Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        let rebase = |p: &Path| p.strip_prefix(from).map(|rel| to.join(rel)).ok();

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|d| d.starts_with(from))
            .filter_map(|d| rebase(d.as_path()))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter(|(p, _)| p.starts_with(from))
            .filter_map(|(p, c)| rebase(p.as_path()).map(|dst| (dst, c.clone())))
            .collect();

        for dir in dirs {
            inner.add_dir_with_parents(&dir);
        }
        inner.files.extend(files);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn same_location(&self, a: &Path, b: &Path) -> bool {
        a == b && self.exists(a)
    }

    fn is_dir_empty(&self, path: &Path) -> KitResult<bool> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Not a directory".into(),
            }
            .into());
        }
        Ok(!inner.has_children(path))
    }

    fn remove_dir_all(&self, path: &Path) -> KitResult<()> {
        let mut inner = self.write()?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn list_files(&self, dir: &Path, extension: &str) -> KitResult<Vec<PathBuf>> {
        let inner = self.read()?;
        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/readme.md"), "x").is_err());

        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/readme.md"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/p/readme.md")).as_deref(), Some("x"));
    }

    #[test]
    fn copy_dir_all_rebases_tree() {
        let fs = MemoryFilesystem::new()
            .with_file("/kit/templates/object.md", "obj")
            .with_file("/kit/templates/sub/action.md", "act")
            .with_dir("/kit/templates/empty");

        fs.copy_dir_all(Path::new("/kit/templates"), Path::new("/p/templates"))
            .unwrap();

        assert_eq!(
            fs.read_file(Path::new("/p/templates/sub/action.md")).as_deref(),
            Some("act")
        );
        assert!(fs.exists(Path::new("/p/templates/empty")));
        assert!(fs.exists(Path::new("/kit/templates/object.md")));
    }

    #[test]
    fn is_dir_empty_sees_nested_dirs() {
        let fs = MemoryFilesystem::new().with_dir("/p/inner");
        assert!(!fs.is_dir_empty(Path::new("/p")).unwrap());
        assert!(fs.is_dir_empty(Path::new("/p/inner")).unwrap());
    }

    #[test]
    fn remove_dir_all_drops_subtree_only() {
        let fs = MemoryFilesystem::new()
            .with_file("/p/a/one.md", "1")
            .with_file("/p/b/two.md", "2");

        fs.remove_dir_all(Path::new("/p/a")).unwrap();
        assert!(!fs.exists(Path::new("/p/a")));
        assert!(!fs.exists(Path::new("/p/a/one.md")));
        assert!(fs.exists(Path::new("/p/b/two.md")));
    }

    #[test]
    fn list_files_is_shallow() {
        let fs = MemoryFilesystem::new()
            .with_file("/c/commands/init.md", "")
            .with_file("/c/commands/review.md", "")
            .with_file("/c/commands/readme.txt", "")
            .with_file("/c/commands/nested/deep.md", "");

        let files = fs.list_files(Path::new("/c/commands"), "md").unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/c/commands/init.md"),
                PathBuf::from("/c/commands/review.md"),
            ]
        );
        assert!(fs.list_files(Path::new("/absent"), "md").unwrap().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("/shared")).unwrap();
        assert!(other.exists(Path::new("/shared")));
    }
}

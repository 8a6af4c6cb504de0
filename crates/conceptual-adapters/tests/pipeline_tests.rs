//! End-to-end `init` runs over real adapters.

use std::path::{Path, PathBuf};

use conceptual_adapters::{LocalFilesystem, MemoryFilesystem};
use conceptual_core::{
    application::{ApplicationError, InitRequest, InitService, InstallLayout, ResourceLocator},
    domain::{Assistant, ProjectTarget, ScaffoldStep, StepStatus},
    error::{KitError, KitResult},
    prelude::VersionControl,
};
use tempfile::TempDir;

/// Creates `.git` the way `git init` would, or fails on demand.
struct FakeGit {
    fail: bool,
}

impl VersionControl for FakeGit {
    fn name(&self) -> &'static str {
        "git"
    }

    fn init_repository(&self, dir: &Path) -> KitResult<()> {
        if self.fail {
            return Err(ApplicationError::VersionControlFailed {
                tool: "git",
                reason: "not installed".into(),
            }
            .into());
        }
        std::fs::create_dir_all(dir.join(".git")).map_err(|e| {
            ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn write(path: PathBuf, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A kit checkout with every resource present.
fn seed_kit(root: &Path) {
    write(root.join("templates/object.md"), "# Object");
    write(root.join("templates/relationship.md"), "# Relationship");
    write(root.join("examples/library/model.md"), "# Library");
    write(root.join(".claude/commands/concept.init.md"), "init");
    write(root.join(".claude/commands/concept.review.md"), "review");
    write(root.join(".claude/commands/concept.status.md"), "status");
    write(root.join(".claude/settings.json"), "{}");
    write(root.join(".github/copilot-instructions.md"), "Be helpful.");
    write(root.join("conceptual-modeling.md"), "# Guide");
}

fn locator(kit: &Path) -> ResourceLocator {
    ResourceLocator::new(&InstallLayout {
        dev_root: kit.to_path_buf(),
        env_prefix: None,
        global_prefix: kit.join("no-such-prefix"),
    })
}

fn local_service(kit: &Path, git: FakeGit) -> InitService {
    InitService::new(Box::new(LocalFilesystem::new()), Box::new(git), locator(kit))
}

fn request(name: Option<&str>, here: bool, cwd: &Path) -> InitRequest {
    InitRequest::new(ProjectTarget::resolve(name, here, cwd).unwrap())
}

#[test]
fn test_fresh_init_produces_every_artifact() {
    let kit = TempDir::new().unwrap();
    seed_kit(kit.path());
    let work = TempDir::new().unwrap();

    let report = local_service(kit.path(), FakeGit { fail: false })
        .initialize(request(Some("shop"), false, work.path()))
        .unwrap();

    let project = work.path().join("shop");
    for rel in [
        "templates/object.md",
        "examples/library/model.md",
        "docs",
        ".claude/commands/concept.init.md",
        ".claude/settings.json",
        ".github/copilot-instructions.md",
        "conceptual-modeling.md",
        ".git",
        ".gitignore",
        "README.md",
    ] {
        assert!(project.join(rel).exists(), "missing {rel}");
    }
    assert!(!report.has_warnings());
    assert_eq!(report.command_count, Some(3));

    let readme = std::fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.starts_with("# shop\n"));
}

#[test]
fn test_second_init_without_force_leaves_target_untouched() {
    let kit = TempDir::new().unwrap();
    seed_kit(kit.path());
    let work = TempDir::new().unwrap();
    let project = work.path().join("shop");
    write(project.join("notes.md"), "mine");

    let err = local_service(kit.path(), FakeGit { fail: false })
        .initialize(request(Some("shop"), false, work.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        KitError::Application(ApplicationError::TargetNotEmpty { .. })
    ));
    let entries: Vec<_> = std::fs::read_dir(&project).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(std::fs::read_to_string(project.join("notes.md")).unwrap(), "mine");
}

#[test]
fn test_force_replaces_copied_trees_without_residue() {
    let kit = TempDir::new().unwrap();
    seed_kit(kit.path());
    let work = TempDir::new().unwrap();
    let project = work.path().join("shop");
    write(project.join("templates/stale.md"), "old");
    write(project.join("examples/old/model.md"), "old");
    write(project.join(".claude/commands/legacy.md"), "old");
    write(project.join("notes.md"), "kept");

    let mut req = request(Some("shop"), false, work.path());
    req.force = true;
    let report = local_service(kit.path(), FakeGit { fail: false })
        .initialize(req)
        .unwrap();

    assert!(!project.join("templates/stale.md").exists());
    assert!(!project.join("examples/old").exists());
    assert!(!project.join(".claude/commands/legacy.md").exists());
    assert!(project.join("templates/object.md").exists());
    assert!(project.join("notes.md").exists());
    assert_eq!(report.command_count, Some(3));
}

#[test]
fn test_here_matches_named_init_from_parent() {
    let kit = TempDir::new().unwrap();
    seed_kit(kit.path());

    let parent = TempDir::new().unwrap();
    local_service(kit.path(), FakeGit { fail: false })
        .initialize(request(Some("atlas"), false, parent.path()))
        .unwrap();

    let other = TempDir::new().unwrap();
    let inside = other.path().join("atlas");
    std::fs::create_dir(&inside).unwrap();
    local_service(kit.path(), FakeGit { fail: false })
        .initialize(request(None, true, &inside))
        .unwrap();

    let named = std::fs::read_to_string(parent.path().join("atlas/README.md")).unwrap();
    let here = std::fs::read_to_string(inside.join("README.md")).unwrap();
    assert_eq!(named, here);
    assert!(here.starts_with("# atlas\n"));
}

#[test]
fn test_no_git_creates_no_metadata() {
    let kit = TempDir::new().unwrap();
    seed_kit(kit.path());
    let work = TempDir::new().unwrap();

    let mut req = request(Some("plain"), false, work.path());
    req.init_git = false;
    // A failing tool must not matter when it is never asked.
    let report = local_service(kit.path(), FakeGit { fail: true })
        .initialize(req)
        .unwrap();

    let project = work.path().join("plain");
    assert!(!project.join(".git").exists());
    assert!(!project.join(".gitignore").exists());
    assert!(!report.has_warnings());
}

#[test]
fn test_failed_git_still_finishes() {
    let kit = TempDir::new().unwrap();
    seed_kit(kit.path());
    let work = TempDir::new().unwrap();

    let report = local_service(kit.path(), FakeGit { fail: true })
        .initialize(request(Some("nogit"), false, work.path()))
        .unwrap();

    let project = work.path().join("nogit");
    assert!(!project.join(".gitignore").exists());
    assert!(project.join("README.md").exists());
    assert_eq!(
        report.outcome(ScaffoldStep::VersionControl).unwrap().status,
        StepStatus::Warning
    );
}

#[test]
fn test_empty_kit_still_scaffolds_skeleton() {
    let kit = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let report = local_service(kit.path(), FakeGit { fail: false })
        .initialize(request(Some("bare"), false, work.path()))
        .unwrap();

    let project = work.path().join("bare");
    assert!(project.join("docs").is_dir());
    assert!(project.join(".github").is_dir());
    assert!(project.join("README.md").exists());
    assert!(!project.join("templates").exists());
    assert_eq!(report.warnings().count(), 3);
    assert_eq!(report.command_count, None);
}

#[test]
fn test_memory_filesystem_pipeline() {
    let kit = PathBuf::from("/kit");
    let fs = MemoryFilesystem::new()
        .with_file("/kit/templates/object.md", "# Object")
        .with_file("/kit/examples/blog/model.md", "# Blog")
        .with_file("/kit/.claude/commands/concept.init.md", "init")
        .with_file("/kit/.github/copilot-instructions.md", "hi")
        .with_file("/kit/conceptual-modeling.md", "# Guide")
        .with_dir("/work");

    struct NoopGit;
    impl VersionControl for NoopGit {
        fn name(&self) -> &'static str {
            "git"
        }
        fn init_repository(&self, _: &Path) -> KitResult<()> {
            Ok(())
        }
    }

    let service = InitService::new(Box::new(fs.clone()), Box::new(NoopGit), locator(&kit));
    let mut req = request(Some("blog"), false, Path::new("/work"));
    req.assistant = Assistant::Gemini;
    let report = service.initialize(req).unwrap();

    assert_eq!(report.command_count, Some(1));
    let readme = fs.read_file(Path::new("/work/blog/README.md")).unwrap();
    assert!(readme.contains("Gemini"));
    assert_eq!(
        fs.read_file(Path::new("/work/blog/.github/copilot-instructions.md"))
            .as_deref(),
        Some("hi")
    );
    assert!(fs.read_file(Path::new("/work/blog/.gitignore")).is_some());
    assert_eq!(fs.files_under(Path::new("/work/blog/templates")).len(), 1);
}

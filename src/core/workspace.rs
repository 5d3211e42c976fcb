//! Open repositories and the seam between the collector and version control.
//!
//! The context collector never talks to git2 directly. It asks a [`Workspace`]
//! for the repository containing the active document and then queries that
//! repository through the [`SourceControl`] trait, which lets hosts plug in
//! their own version-control backend.
//!
//! # Public API
//! - [`SourceControl`]: Read-only queries the collector needs from a repository
//! - [`Head`]: Current branch name and full commit hash
//! - [`ChangeSet`]: Index, working-tree and merge change lists
//! - [`Workspace`]: Ordered list of open repositories

use crate::core::{error::Result, git::GitRepo, git_status::Change};
use std::path::{Path, PathBuf};

/// Branch HEAD points at and the commit it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    pub name: String,
    pub commit: String,
}

/// Uncommitted changes grouped the way the status view groups them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub index: Vec<Change>,
    pub working_tree: Vec<Change>,
    pub merge: Vec<Change>,
}

impl ChangeSet {
    pub fn untracked_count(&self) -> usize {
        self.working_tree
            .iter()
            .filter(|change| change.status.is_untracked())
            .count()
    }
}

/// Repository queries used to build git context.
///
/// Every query may fail; callers treat any failure as "no git data".
pub trait SourceControl {
    /// Working directory root of the repository
    fn root(&self) -> &Path;

    fn head(&self) -> Result<Head>;

    /// Commits ahead of / behind the upstream of `branch`.
    /// `None` when the branch has no upstream configured.
    fn ahead_behind(&self, branch: &str) -> Result<Option<(usize, usize)>>;

    fn changes(&self) -> Result<ChangeSet>;
}

/// Repositories open in the current session, in discovery order
#[derive(Default)]
pub struct Workspace {
    repositories: Vec<Box<dyn SourceControl>>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workspace from explicit repository paths followed by the
    /// repository discovered from `document`, if any.
    ///
    /// Paths that are not inside a repository are skipped with a warning.
    /// A repository reached twice is only kept once.
    pub fn discover(repo_paths: &[PathBuf], document: Option<&Path>) -> Self {
        let mut workspace = Self::new();

        let discovered = document.and_then(|doc| doc.parent().map(Path::to_path_buf));
        for path in repo_paths.iter().chain(discovered.iter()) {
            match GitRepo::open(path) {
                Ok(repo) => {
                    if workspace.contains_root(repo.root()) {
                        log::debug!("Skipping duplicate repository {}", repo.root().display());
                        continue;
                    }
                    log::debug!("Opened repository {}", repo.root().display());
                    workspace.push(Box::new(repo));
                }
                Err(e) => log::warn!("Ignoring {}: {e}", path.display()),
            }
        }

        workspace
    }

    pub fn push(&mut self, repository: Box<dyn SourceControl>) {
        self.repositories.push(repository);
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    fn contains_root(&self, root: &Path) -> bool {
        self.repositories.iter().any(|repo| repo.root() == root)
    }

    /// First repository whose root is a prefix of `path`.
    ///
    /// When several roots match (nested repositories) the earliest one in
    /// workspace order wins, not the most specific one.
    pub fn find_repository(&self, path: &Path) -> Option<&dyn SourceControl> {
        self.repositories
            .iter()
            .find(|repo| path.starts_with(repo.root()))
            .map(|repo| repo.as_ref())
    }
}

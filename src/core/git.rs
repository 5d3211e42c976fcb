//! Git repository queries backed by `git2`.
//!
//! [`GitRepo`] is the [`SourceControl`] implementation used by the command-line
//! host. It only reads repository state: HEAD, the upstream distance of the
//! current branch, and the staged, unstaged and conflicted change lists.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for git repository queries

use crate::core::{
    error::{Result, StarpostError},
    git_status::{Change, ChangeStatus},
    workspace::{ChangeSet, Head, SourceControl},
};
use git2::{ErrorCode, Repository, StatusOptions};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    root: PathBuf,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| StarpostError::NotInGitRepo)?;
        let workdir = repo
            .workdir()
            .ok_or(StarpostError::NotInGitRepo)?
            .to_path_buf();
        // Document paths are canonicalized, roots must be too for prefix matching
        let root = workdir.canonicalize().unwrap_or(workdir);
        Ok(GitRepo { repo, root })
    }

    pub fn get_current_branch(&self) -> Result<Head> {
        // Fails for repositories without commits (unborn HEAD)
        let head = self.repo.head()?;

        if !head.is_branch() {
            return Err(StarpostError::DetachedHead);
        }

        let name = head
            .shorthand()
            .ok_or_else(|| git2::Error::from_str("branch name is not valid UTF-8"))?
            .to_string();
        let commit = head
            .target()
            .ok_or_else(|| git2::Error::from_str("HEAD does not point at a commit"))?
            .to_string();

        Ok(Head { name, commit })
    }

    /// Get ahead/behind information for `branch` relative to its upstream
    /// Returns (ahead, behind) counts, or None if no upstream is set
    pub fn get_ahead_behind(&self, branch: &str) -> Result<Option<(usize, usize)>> {
        let local_branch = self.repo.find_branch(branch, git2::BranchType::Local)?;

        let upstream_branch = match local_branch.upstream() {
            Ok(upstream) => upstream,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let local_oid = local_branch
            .get()
            .target()
            .ok_or_else(|| git2::Error::from_str("branch does not point at a commit"))?;
        let upstream_oid = upstream_branch
            .get()
            .target()
            .ok_or_else(|| git2::Error::from_str("upstream does not point at a commit"))?;

        let (ahead, behind) = self.repo.graph_ahead_behind(local_oid, upstream_oid)?;
        Ok(Some((ahead, behind)))
    }

    pub fn get_changes(&self) -> Result<ChangeSet> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut changes = ChangeSet::default();

        for entry in statuses.iter() {
            let status_flags = entry.status();

            // Conflicted entries are reported from the index conflicts below
            if status_flags.contains(git2::Status::CONFLICTED) {
                continue;
            }

            let path = PathBuf::from(String::from_utf8_lossy(entry.path_bytes()).into_owned());

            if let Some(status) = ChangeStatus::from_git2_index(status_flags) {
                changes.index.push(Change::new(path.clone(), status));
            }

            if let Some(status) = ChangeStatus::from_git2_worktree(status_flags) {
                changes.working_tree.push(Change::new(path, status));
            }
        }

        changes.merge = self.get_merge_changes()?;

        log::debug!(
            "{}: {} staged, {} unstaged, {} conflicted",
            self.root.display(),
            changes.index.len(),
            changes.working_tree.len(),
            changes.merge.len()
        );

        Ok(changes)
    }

    fn get_merge_changes(&self) -> Result<Vec<Change>> {
        let index = self.repo.index()?;
        if !index.has_conflicts() {
            return Ok(Vec::new());
        }

        let mut merge = Vec::new();
        for conflict in index.conflicts()? {
            let conflict = conflict?;
            let path = conflict
                .our
                .as_ref()
                .or(conflict.their.as_ref())
                .or(conflict.ancestor.as_ref())
                .map(|entry| String::from_utf8_lossy(&entry.path).into_owned())
                .unwrap_or_default();
            let status = ChangeStatus::from_conflict_sides(
                conflict.ancestor.is_some(),
                conflict.our.is_some(),
                conflict.their.is_some(),
            );
            log::debug!("Conflict in {path}: {status}");
            merge.push(Change::new(path, status));
        }

        Ok(merge)
    }
}

impl SourceControl for GitRepo {
    fn root(&self) -> &Path {
        &self.root
    }

    fn head(&self) -> Result<Head> {
        self.get_current_branch()
    }

    fn ahead_behind(&self, branch: &str) -> Result<Option<(usize, usize)>> {
        self.get_ahead_behind(branch)
    }

    fn changes(&self) -> Result<ChangeSet> {
        self.get_changes()
    }
}

//! Context collection for a single copy invocation.
//!
//! [`collect_context`] turns the active [`Selection`] into [`ContextData`], the
//! flat mapping templates are rendered from. Git details are best-effort: they
//! are either gathered completely or dropped completely, and the reason for
//! dropping them is carried in [`Collected::Fallback`].
//!
//! # Public API
//! - [`ContextData`]: Selection fields plus optional [`GitContext`]
//! - [`GitContext`]: Repository, branch, commit and change counts
//! - [`Collected`]: Tagged result choosing between git and fallback templates
//! - [`collect_context`]: Build a [`Collected`] value from editor and workspace state

use crate::core::{
    error::{Result, StarpostError},
    selection::Selection,
    workspace::{SourceControl, Workspace},
};
use serde::Serialize;
use std::path::Path;

/// Number of hash characters kept for the `commit` field
pub const SHORT_COMMIT_LEN: usize = 7;

/// Fields available to templates. Keys are serialized in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextData {
    /// Repo-relative when a repository was found, absolute otherwise
    pub file: String,
    pub start: u32,
    pub end: u32,
    pub language: String,
    pub code: String,
    /// All git fields, or none of them
    #[serde(flatten)]
    pub git: Option<GitContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitContext {
    pub repo: String,
    pub branch: String,
    pub commit: String,
    /// `"<ahead>, <behind>"`
    pub status: String,
    pub staged_count: usize,
    pub unstaged_count: usize,
    pub untracked_count: usize,
    pub merge_in_progress: bool,
}

impl ContextData {
    /// Context without git fields, `file` is the absolute document path
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            file: selection.path.to_string_lossy().into_owned(),
            start: selection.start_line,
            end: selection.end_line,
            language: selection.language.clone(),
            code: selection.text.clone(),
            git: None,
        }
    }

    fn with_git(selection: &Selection, relative_file: String, git: GitContext) -> Self {
        Self {
            file: relative_file,
            git: Some(git),
            ..Self::from_selection(selection)
        }
    }
}

/// Outcome of context collection
#[derive(Debug)]
pub enum Collected {
    /// Git data was gathered, render with the git-enabled template
    Full(ContextData),
    /// Git data was unavailable, render with the fallback template
    Fallback {
        data: ContextData,
        reason: StarpostError,
    },
}

impl Collected {
    pub fn data(&self) -> &ContextData {
        match self {
            Collected::Full(data) => data,
            Collected::Fallback { data, .. } => data,
        }
    }

    pub fn use_fallback(&self) -> bool {
        matches!(self, Collected::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&StarpostError> {
        match self {
            Collected::Full(_) => None,
            Collected::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Gather context for `selection`, augmenting it with git data when the
/// document belongs to a repository in `workspace` and every lookup succeeds.
pub fn collect_context(selection: &Selection, workspace: &Workspace) -> Collected {
    match git_context(selection, workspace) {
        Ok((relative_file, git)) => {
            log::debug!("Collected git context for {relative_file} on {}", git.branch);
            Collected::Full(ContextData::with_git(selection, relative_file, git))
        }
        Err(reason) => {
            if reason.is_git_lookup_failure() {
                log::warn!(
                    "Git context unavailable for {}: {reason}",
                    selection.path.display()
                );
            } else {
                log::error!(
                    "Failed to collect git context for {}: {reason}",
                    selection.path.display()
                );
            }
            Collected::Fallback {
                data: ContextData::from_selection(selection),
                reason,
            }
        }
    }
}

fn git_context(selection: &Selection, workspace: &Workspace) -> Result<(String, GitContext)> {
    let repo = workspace
        .find_repository(&selection.path)
        .ok_or_else(|| StarpostError::no_repository_for_file(&selection.path))?;

    let head = repo.head()?;
    let (ahead, behind) = repo.ahead_behind(&head.name)?.unwrap_or((0, 0));
    let changes = repo.changes()?;

    let git = GitContext {
        repo: repository_name(repo),
        branch: head.name,
        commit: head.commit.chars().take(SHORT_COMMIT_LEN).collect(),
        status: format!("{ahead}, {behind}"),
        staged_count: changes.index.len(),
        unstaged_count: changes.working_tree.len(),
        untracked_count: changes.untracked_count(),
        merge_in_progress: !changes.merge.is_empty(),
    };

    Ok((relative_path(repo.root(), &selection.path), git))
}

fn repository_name(repo: &dyn SourceControl) -> String {
    repo.root()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

//! Type-safe change status enumeration.
//!
//! This module defines [`ChangeStatus`] which classifies a single changed path the
//! way editor source-control integrations do: one numeric code per status, shared
//! between index, working-tree and merge change lists.
//!
//! # Public API
//! - [`ChangeStatus`]: Enumeration of every change status with its numeric code
//! - [`Change`]: A changed path together with its status
//! - [`UNTRACKED_STATUS_CODE`]: The sentinel code identifying untracked files
//!
//! # Key Features
//! - **git2 integration**: Direct conversion from `git2::Status` flags
//! - **Conflict classification**: Merge status from the sides present in an index conflict
//! - **Stable codes**: `code()` matches the numbering templates and hosts expect

use std::fmt;
use std::path::PathBuf;

/// Status code of a file that is not yet tracked by version control
pub const UNTRACKED_STATUS_CODE: u8 = 7;

/// Change status, numbered the way editor source-control APIs number them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeStatus {
    IndexModified,
    IndexAdded,
    IndexDeleted,
    IndexRenamed,
    IndexCopied,
    Modified,
    Deleted,
    Untracked,
    Ignored,
    IntentToAdd,
    IntentToRename,
    TypeChanged,
    AddedByUs,
    AddedByThem,
    DeletedByUs,
    DeletedByThem,
    BothAdded,
    BothDeleted,
    BothModified,
}

impl ChangeStatus {
    /// Numeric status code
    pub fn code(&self) -> u8 {
        match self {
            ChangeStatus::IndexModified => 0,
            ChangeStatus::IndexAdded => 1,
            ChangeStatus::IndexDeleted => 2,
            ChangeStatus::IndexRenamed => 3,
            ChangeStatus::IndexCopied => 4,
            ChangeStatus::Modified => 5,
            ChangeStatus::Deleted => 6,
            ChangeStatus::Untracked => UNTRACKED_STATUS_CODE,
            ChangeStatus::Ignored => 8,
            ChangeStatus::IntentToAdd => 9,
            ChangeStatus::IntentToRename => 10,
            ChangeStatus::TypeChanged => 11,
            ChangeStatus::AddedByUs => 12,
            ChangeStatus::AddedByThem => 13,
            ChangeStatus::DeletedByUs => 14,
            ChangeStatus::DeletedByThem => 15,
            ChangeStatus::BothAdded => 16,
            ChangeStatus::BothDeleted => 17,
            ChangeStatus::BothModified => 18,
        }
    }

    /// Convert the staged half of git2 status flags.
    /// Returns `None` when nothing is staged for the entry.
    pub fn from_git2_index(flags: git2::Status) -> Option<ChangeStatus> {
        if flags.contains(git2::Status::INDEX_NEW) {
            return Some(ChangeStatus::IndexAdded);
        }
        if flags.contains(git2::Status::INDEX_MODIFIED) {
            return Some(ChangeStatus::IndexModified);
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return Some(ChangeStatus::IndexDeleted);
        }
        if flags.contains(git2::Status::INDEX_RENAMED) {
            return Some(ChangeStatus::IndexRenamed);
        }
        if flags.contains(git2::Status::INDEX_TYPECHANGE) {
            return Some(ChangeStatus::TypeChanged);
        }

        None
    }

    /// Convert the working-tree half of git2 status flags.
    /// Returns `None` when the working tree matches the index for the entry.
    pub fn from_git2_worktree(flags: git2::Status) -> Option<ChangeStatus> {
        if flags.contains(git2::Status::WT_NEW) {
            return Some(ChangeStatus::Untracked);
        }
        if flags.contains(git2::Status::WT_MODIFIED) || flags.contains(git2::Status::WT_RENAMED) {
            return Some(ChangeStatus::Modified);
        }
        if flags.contains(git2::Status::WT_DELETED) {
            return Some(ChangeStatus::Deleted);
        }
        if flags.contains(git2::Status::WT_TYPECHANGE) {
            return Some(ChangeStatus::TypeChanged);
        }

        None
    }

    /// Classify an index conflict by which stages are present
    pub fn from_conflict_sides(ancestor: bool, ours: bool, theirs: bool) -> ChangeStatus {
        match (ancestor, ours, theirs) {
            (false, true, true) => ChangeStatus::BothAdded,
            (true, false, false) => ChangeStatus::BothDeleted,
            (true, false, true) => ChangeStatus::DeletedByUs,
            (true, true, false) => ChangeStatus::DeletedByThem,
            (false, true, false) => ChangeStatus::AddedByUs,
            (false, false, true) => ChangeStatus::AddedByThem,
            _ => ChangeStatus::BothModified,
        }
    }

    /// Whether this status marks an untracked file
    pub fn is_untracked(&self) -> bool {
        self.code() == UNTRACKED_STATUS_CODE
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self {
            ChangeStatus::IndexModified | ChangeStatus::Modified => "modified",
            ChangeStatus::IndexAdded => "added",
            ChangeStatus::IndexDeleted | ChangeStatus::Deleted => "deleted",
            ChangeStatus::IndexRenamed | ChangeStatus::IntentToRename => "renamed",
            ChangeStatus::IndexCopied => "copied",
            ChangeStatus::Untracked => "untracked",
            ChangeStatus::Ignored => "ignored",
            ChangeStatus::IntentToAdd => "intent to add",
            ChangeStatus::TypeChanged => "type changed",
            ChangeStatus::AddedByUs => "added by us",
            ChangeStatus::AddedByThem => "added by them",
            ChangeStatus::DeletedByUs => "deleted by us",
            ChangeStatus::DeletedByThem => "deleted by them",
            ChangeStatus::BothAdded => "both added",
            ChangeStatus::BothDeleted => "both deleted",
            ChangeStatus::BothModified => "both modified",
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A single changed path, relative to the repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub path: PathBuf,
    pub status: ChangeStatus,
}

impl Change {
    pub fn new(path: impl Into<PathBuf>, status: ChangeStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ChangeStatus::IndexModified.code(), 0);
        assert_eq!(ChangeStatus::IndexAdded.code(), 1);
        assert_eq!(ChangeStatus::Modified.code(), 5);
        assert_eq!(ChangeStatus::Untracked.code(), 7);
        assert_eq!(ChangeStatus::BothModified.code(), 18);
    }

    #[test]
    fn test_only_untracked_uses_sentinel() {
        let all = [
            ChangeStatus::IndexModified,
            ChangeStatus::IndexAdded,
            ChangeStatus::IndexDeleted,
            ChangeStatus::IndexRenamed,
            ChangeStatus::IndexCopied,
            ChangeStatus::Modified,
            ChangeStatus::Deleted,
            ChangeStatus::Untracked,
            ChangeStatus::Ignored,
            ChangeStatus::IntentToAdd,
            ChangeStatus::IntentToRename,
            ChangeStatus::TypeChanged,
            ChangeStatus::AddedByUs,
            ChangeStatus::AddedByThem,
            ChangeStatus::DeletedByUs,
            ChangeStatus::DeletedByThem,
            ChangeStatus::BothAdded,
            ChangeStatus::BothDeleted,
            ChangeStatus::BothModified,
        ];
        let untracked: Vec<_> = all.iter().filter(|s| s.is_untracked()).collect();
        assert_eq!(untracked, vec![&ChangeStatus::Untracked]);
    }

    #[test]
    fn test_from_git2_flags() {
        assert_eq!(
            ChangeStatus::from_git2_index(git2::Status::INDEX_NEW),
            Some(ChangeStatus::IndexAdded)
        );
        assert_eq!(
            ChangeStatus::from_git2_index(git2::Status::INDEX_MODIFIED),
            Some(ChangeStatus::IndexModified)
        );
        assert_eq!(ChangeStatus::from_git2_index(git2::Status::WT_NEW), None);

        assert_eq!(
            ChangeStatus::from_git2_worktree(git2::Status::WT_NEW),
            Some(ChangeStatus::Untracked)
        );
        assert_eq!(
            ChangeStatus::from_git2_worktree(git2::Status::WT_DELETED),
            Some(ChangeStatus::Deleted)
        );
        assert_eq!(
            ChangeStatus::from_git2_worktree(git2::Status::INDEX_MODIFIED),
            None
        );
    }

    #[test]
    fn test_staged_and_unstaged_on_same_entry() {
        let flags = git2::Status::INDEX_MODIFIED | git2::Status::WT_MODIFIED;
        assert_eq!(
            ChangeStatus::from_git2_index(flags),
            Some(ChangeStatus::IndexModified)
        );
        assert_eq!(
            ChangeStatus::from_git2_worktree(flags),
            Some(ChangeStatus::Modified)
        );
    }

    #[test]
    fn test_conflict_sides() {
        assert_eq!(
            ChangeStatus::from_conflict_sides(true, true, true),
            ChangeStatus::BothModified
        );
        assert_eq!(
            ChangeStatus::from_conflict_sides(false, true, true),
            ChangeStatus::BothAdded
        );
        assert_eq!(
            ChangeStatus::from_conflict_sides(true, false, true),
            ChangeStatus::DeletedByUs
        );
        assert_eq!(
            ChangeStatus::from_conflict_sides(true, true, false),
            ChangeStatus::DeletedByThem
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ChangeStatus::Untracked), "untracked");
        assert_eq!(format!("{}", ChangeStatus::BothModified), "both modified");
    }
}

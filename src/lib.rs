//! StarPost - copy code selections to the clipboard with their context.
//!
//! This library renders a selected snippet through a template together with
//! its file path, line range, language and, when available, git details
//! (branch, short commit, upstream distance and change counts).
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The [`Editor`], [`SourceControl`], [`Clipboard`] and [`StatusSurface`] seams a host implements
//! - Context collection with an all-or-nothing git fallback
//! - Template loading and rendering without escaping
//! - The status indicator and its confirmation flash

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use self::core::{
    collect_context,
    print_error,
    Change,
    ChangeSet,
    ChangeStatus,
    Clipboard,
    Collected,
    Config,
    ContextData,
    // Editor seam
    Editor,
    FileEditor,
    GitContext,
    // Version control
    GitRepo,
    Head,
    MemoryClipboard,
    Result,
    Selection,
    SourceControl,
    // Error handling
    StarpostError,
    StatusIndicator,
    StatusSurface,
    StdoutClipboard,
    SystemClipboard,
    // Templates
    Template,
    TemplateSet,
    TerminalSurface,
    Workspace,
    UNTRACKED_STATUS_CODE,
};

pub use commands::{CopyCommand, CopyOutcome};

//! Core functionality for starpost.
//!
//! This module provides the building blocks of the copy flow: reading the
//! selection, collecting git context, rendering templates, and reporting
//! progress through the status indicator.

pub mod clipboard;
pub mod config;
pub mod context;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_status;
pub mod languages;
pub mod output;
pub mod selection;
pub mod status_bar;
pub mod templates;
pub mod workspace;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, StarpostError};

// === Editor seam ===
// Active selection and the command-line stand-in for an editor
pub use selection::{Editor, FileEditor, Selection};

// === Version control ===
// Repository queries, change classification and the open-repository list
pub use git::GitRepo;
pub use git_status::{Change, ChangeStatus, UNTRACKED_STATUS_CODE};
pub use workspace::{ChangeSet, Head, SourceControl, Workspace};

// === Context collection ===
// Template fields and the git / fallback decision
pub use context::{collect_context, Collected, ContextData, GitContext};

// === Templates ===
pub use config::Config;
pub use templates::{Template, TemplateSet};

// === Status indicator and clipboard ===
pub use clipboard::{Clipboard, MemoryClipboard, StdoutClipboard, SystemClipboard};
pub use status_bar::{StatusIndicator, StatusSurface, TerminalSurface};

// === Output formatting ===
pub use output::print_error;

pub mod context;
pub mod copy;

pub use context::*;
pub use copy::*;

use crate::core::selection::FileEditor;
use clap::Args;
use std::path::PathBuf;

/// Which lines of which file are selected, and which repositories are open
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// File the selection is in (omit to run without an active editor)
    pub file: Option<PathBuf>,

    /// First selected line (zero-based)
    #[arg(short, long, default_value_t = 0)]
    pub start: u32,

    /// Last selected line (zero-based, inclusive; defaults to --start)
    #[arg(short, long)]
    pub end: Option<u32>,

    /// Language identifier (derived from the file extension by default)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Open repository, in lookup order (may be repeated)
    #[arg(long = "repo", value_name = "PATH")]
    pub repos: Vec<PathBuf>,
}

impl SelectionArgs {
    pub fn editor(&self) -> FileEditor {
        FileEditor::new(self.file.clone(), self.start, self.end.unwrap_or(self.start))
            .with_language(self.language.clone())
    }

    /// Absolute document path, used to discover its repository
    pub fn document(&self) -> Option<PathBuf> {
        self.file.as_ref().and_then(|file| file.canonicalize().ok())
    }
}

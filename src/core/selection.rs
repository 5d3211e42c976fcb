//! Editor selections and the active-editor seam.
//!
//! A [`Selection`] is what the copy command reads from the host editor: the
//! document path, its language, an inclusive zero-based line range and the
//! selected text. Hosts expose it through the [`Editor`] trait; [`FileEditor`]
//! is the command-line host, which selects whole lines of a file on disk.

use crate::core::{
    error::{Result, StarpostError},
    languages::language_for_path,
};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Absolute path of the document
    pub path: PathBuf,
    pub language: String,
    /// First selected line, zero-based
    pub start_line: u32,
    /// Last selected line, zero-based and inclusive
    pub end_line: u32,
    /// Selected text, exactly as it appears in the document
    pub text: String,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of selected lines; a reversed range counts as one line
    pub fn line_count(&self) -> u32 {
        self.end_line.saturating_sub(self.start_line).saturating_add(1)
    }
}

/// Access to the editor the user is currently working in
pub trait Editor {
    /// Current selection of the active editor.
    /// Fails with [`StarpostError::NoActiveEditor`] when no editor is active.
    fn active_selection(&self) -> Result<Selection>;
}

/// A file on disk with a line range, standing in for an open editor
#[derive(Debug, Clone)]
pub struct FileEditor {
    path: Option<PathBuf>,
    start_line: u32,
    end_line: u32,
    language: Option<String>,
}

impl FileEditor {
    pub fn new(path: Option<PathBuf>, start_line: u32, end_line: u32) -> Self {
        Self {
            path,
            start_line,
            end_line,
            language: None,
        }
    }

    /// Override the language derived from the file extension
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }
}

impl Editor for FileEditor {
    fn active_selection(&self) -> Result<Selection> {
        let path = self.path.as_ref().ok_or(StarpostError::NoActiveEditor)?;

        if self.start_line > self.end_line {
            return Err(StarpostError::invalid_line_range(
                self.start_line,
                self.end_line,
            ));
        }

        if !path.exists() {
            return Err(StarpostError::file_not_found(path));
        }
        let path = path.canonicalize()?;
        let content = std::fs::read_to_string(&path)?;
        let text = select_lines(&content, self.start_line, self.end_line)?;

        let language = self
            .language
            .clone()
            .unwrap_or_else(|| language_for_path(&path).to_string());

        log::debug!(
            "Selected lines {}-{} of {} ({language})",
            self.start_line,
            self.end_line,
            path.display()
        );

        Ok(Selection {
            path,
            language,
            start_line: self.start_line,
            end_line: self.end_line,
            text,
        })
    }
}

/// Text of lines `start..=end`, joined without a trailing newline.
///
/// Only `\n` separates lines so `\r` and every other character is kept verbatim.
fn select_lines(content: &str, start: u32, end: u32) -> Result<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    // A trailing newline does not start another selectable line
    let count = if content.ends_with('\n') {
        lines.len() - 1
    } else {
        lines.len()
    };

    if end as usize >= count {
        return Err(StarpostError::line_out_of_range(end, count));
    }

    Ok(lines[start as usize..=end as usize].join("\n"))
}

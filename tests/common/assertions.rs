//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating starpost output, error messages,
//! and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the missing editor error
pub fn no_active_editor() -> impl Predicate<str> {
    predicates::str::contains("No active editor")
}

/// Creates a predicate that checks for the copy confirmation flash
pub fn copied_flash() -> impl Predicate<str> {
    predicates::str::contains("Copied ✓")
}

/// Creates a predicate that checks the rendered line range
pub fn has_line_range(start: u32, end: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("lines {start}-{end}"))
}

/// Creates a predicate that checks for git details from the default template
pub fn has_git_details() -> impl Predicate<str> {
    predicates::str::contains("branch ").and(predicates::str::contains("ahead, behind:"))
}

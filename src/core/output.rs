//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Messages go to stderr: stdout is reserved for rendered snippets
//! (`copy --print`) and JSON (`context`), so both stay pipeable.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

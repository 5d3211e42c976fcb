//! Status indicator shown while a selection is active.
//!
//! [`StatusIndicator`] is the single owner of the label text. Selection
//! changes set its steady-state text (or hide it), the copy command
//! temporarily overrides it with a confirmation flash. All writes go through
//! one mutex so the revert timer thread and the command never interleave.
//!
//! Every flash bumps a generation counter. A scheduled revert only restores
//! the steady text if nothing newer was shown in the meantime, so a late
//! timer from an earlier invocation cannot hide a newer flash.

use crate::core::selection::Selection;
use colored::*;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::Duration;

/// Prefix shared by all indicator labels
pub const LABEL_PREFIX: &str = "★ StarPost";

/// Label flashed after a successful copy
pub const COPIED_LABEL: &str = "★ StarPost - Copied ✓";

/// Where the indicator is drawn
pub trait StatusSurface: Send + Sync {
    fn show(&self, text: &str);
    fn hide(&self);
}

/// Draws the indicator as a line on stderr
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl StatusSurface for TerminalSurface {
    fn show(&self, text: &str) {
        eprintln!("{}", text.cyan());
    }

    /// A line already written to the terminal cannot be un-drawn, so hiding
    /// is only recorded in the debug log.
    fn hide(&self) {
        log::debug!("Status indicator hidden");
    }
}

/// Label for a selection spanning `line_count` lines
pub fn selection_label(line_count: u32) -> String {
    if line_count == 1 {
        format!("{LABEL_PREFIX} - Copy 1 line")
    } else {
        format!("{LABEL_PREFIX} - Copy {line_count} lines")
    }
}

#[derive(Debug, Default)]
struct IndicatorState {
    /// Text derived from the current selection, `None` while hidden
    steady: Option<String>,
    /// Text currently displayed, `None` while hidden
    displayed: Option<String>,
    generation: u64,
}

#[derive(Clone)]
pub struct StatusIndicator {
    state: Arc<Mutex<IndicatorState>>,
    surface: Arc<dyn StatusSurface>,
}

impl StatusIndicator {
    pub fn new(surface: Arc<dyn StatusSurface>) -> Self {
        Self {
            state: Arc::new(Mutex::new(IndicatorState::default())),
            surface,
        }
    }

    fn lock(&self) -> MutexGuard<'_, IndicatorState> {
        // A panic while holding the lock cannot leave the label half-written
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Update the steady-state label for a new selection.
    /// Shows the label for a non-empty selection and hides it otherwise.
    pub fn on_selection_change(&self, selection: Option<&Selection>) {
        let steady = selection
            .filter(|selection| !selection.is_empty())
            .map(|selection| selection_label(selection.line_count()));

        let mut state = self.lock();
        state.generation += 1;
        state.steady = steady.clone();
        self.display(&mut state, steady);
    }

    /// Temporarily show `text`; returns the generation to pass to [`revert`](Self::revert)
    pub fn flash(&self, text: &str) -> u64 {
        let mut state = self.lock();
        state.generation += 1;
        self.display(&mut state, Some(text.to_string()));
        state.generation
    }

    /// Restore the steady label if `generation` is still the latest update.
    /// Returns whether the label was restored.
    pub fn revert(&self, generation: u64) -> bool {
        let mut state = self.lock();
        if state.generation != generation {
            log::debug!(
                "Skipping stale revert (generation {generation}, current {})",
                state.generation
            );
            return false;
        }
        let steady = state.steady.clone();
        self.display(&mut state, steady);
        true
    }

    /// Revert after `delay` on a timer thread
    pub fn schedule_revert(&self, generation: u64, delay: Duration) -> JoinHandle<()> {
        let indicator = self.clone();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            indicator.revert(generation);
        })
    }

    /// Currently displayed text, `None` while hidden
    pub fn snapshot(&self) -> Option<String> {
        self.lock().displayed.clone()
    }

    fn display(&self, state: &mut IndicatorState, text: Option<String>) {
        match &text {
            Some(text) => self.surface.show(text),
            None if state.displayed.is_some() => self.surface.hide(),
            None => {}
        }
        state.displayed = text;
    }
}

use crate::commands::SelectionArgs;
use crate::core::{
    clipboard::{Clipboard, StdoutClipboard, SystemClipboard},
    config::Config,
    context::collect_context,
    error::Result,
    selection::Editor,
    status_bar::{StatusIndicator, TerminalSurface, COPIED_LABEL},
    templates::TemplateSet,
    workspace::Workspace,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// How long the confirmation stays up before the selection label returns
pub const REVERT_DELAY: Duration = Duration::from_millis(1500);

/// Result of one copy invocation
pub struct CopyOutcome {
    pub rendered: String,
    pub used_fallback: bool,
    /// Timer restoring the indicator; join it to wait for the steady label
    pub revert: JoinHandle<()>,
}

/// The "copy selection with context" command
pub struct CopyCommand {
    templates: TemplateSet,
    indicator: StatusIndicator,
    revert_delay: Duration,
}

impl CopyCommand {
    pub fn new(templates: TemplateSet, indicator: StatusIndicator) -> Self {
        Self {
            templates,
            indicator,
            revert_delay: REVERT_DELAY,
        }
    }

    pub fn with_revert_delay(mut self, revert_delay: Duration) -> Self {
        self.revert_delay = revert_delay;
        self
    }

    pub fn indicator(&self) -> &StatusIndicator {
        &self.indicator
    }

    /// Copy the active selection, rendered with context, to `clipboard`.
    ///
    /// Missing git data is not an error: the fallback template is used
    /// instead. Errors abort the command before the clipboard is touched,
    /// except for a failing clipboard write itself.
    pub fn run(
        &self,
        editor: &dyn Editor,
        workspace: &Workspace,
        clipboard: &mut dyn Clipboard,
    ) -> Result<CopyOutcome> {
        let selection = editor.active_selection()?;
        self.indicator.on_selection_change(Some(&selection));

        let collected = collect_context(&selection, workspace);
        let template = self.templates.select(&collected);
        log::debug!("Rendering with template {}", template.name());

        let rendered = template.generate(collected.data())?;
        clipboard.write_text(&rendered)?;

        let generation = self.indicator.flash(COPIED_LABEL);
        let revert = self
            .indicator
            .schedule_revert(generation, self.revert_delay);

        Ok(CopyOutcome {
            rendered,
            used_fallback: collected.use_fallback(),
            revert,
        })
    }
}

pub fn execute_copy(
    args: SelectionArgs,
    git_template: Option<PathBuf>,
    fallback_template: Option<PathBuf>,
    print: bool,
) -> Result<()> {
    // Template problems abort before any selection is read
    let config = Config::load()?.with_overrides(git_template, fallback_template);
    let templates = TemplateSet::load(&config)?;

    let command = CopyCommand::new(templates, StatusIndicator::new(Arc::new(TerminalSurface)));
    let editor = args.editor();
    let workspace = Workspace::discover(&args.repos, args.document().as_deref());
    log::debug!("Workspace has {} repositories", workspace.len());

    // The clipboard must outlive the revert timer: on X11 the selection is
    // served by this process and disappears with it.
    let mut clipboard: Box<dyn Clipboard> = if print {
        Box::new(StdoutClipboard)
    } else {
        Box::new(SystemClipboard::new())
    };

    let outcome = command.run(&editor, &workspace, clipboard.as_mut())?;
    log::info!(
        "Copied {} bytes{}",
        outcome.rendered.len(),
        if outcome.used_fallback {
            " (fallback template)"
        } else {
            ""
        }
    );

    if outcome.revert.join().is_err() {
        log::warn!("Status indicator revert timer panicked");
    }

    Ok(())
}

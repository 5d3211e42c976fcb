use crate::commands::SelectionArgs;
use crate::core::{
    context::{collect_context, Collected, ContextData},
    error::Result,
    selection::Editor,
    workspace::Workspace,
};
use serde::Serialize;

/// JSON shape printed by the `context` command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextReport<'a> {
    pub data: &'a ContextData,
    pub use_fallback: bool,
    pub fallback_reason: Option<String>,
}

impl<'a> From<&'a Collected> for ContextReport<'a> {
    fn from(collected: &'a Collected) -> Self {
        Self {
            data: collected.data(),
            use_fallback: collected.use_fallback(),
            fallback_reason: collected.fallback_reason().map(|reason| reason.to_string()),
        }
    }
}

/// Print the template fields the copy command would render, as JSON
pub fn execute_context(args: SelectionArgs) -> Result<()> {
    let selection = args.editor().active_selection()?;
    let workspace = Workspace::discover(&args.repos, Some(&selection.path));

    let collected = collect_context(&selection, &workspace);
    let json = serde_json::to_string_pretty(&ContextReport::from(&collected))?;
    println!("{json}");

    Ok(())
}

use super::parser::ParseResult;
use super::selection::SelectionState;
use crate::error::{Result, TaskcatError};

/// Render the checked tasks back into the reply grammar.
///
/// Categories keep their order and only those with at least one checked task
/// are written. Fails with [`TaskcatError::NoSelection`] when nothing is
/// checked, so an empty export is never confused with a real one.
pub fn export_selection(parsed: &ParseResult, selection: &SelectionState) -> Result<String> {
    let mut blocks = Vec::new();

    for category in &parsed.categories {
        let selected: Vec<String> = category
            .tasks
            .iter()
            .filter(|t| selection.get(&t.key()))
            .map(|t| format!("- {}", t.label))
            .collect();

        if selected.is_empty() {
            continue;
        }
        blocks.push(format!("{}\n{}", category.name, selected.join("\n")));
    }

    if blocks.is_empty() {
        return Err(TaskcatError::NoSelection);
    }

    let text = blocks.join("\n\n").trim().to_string();
    tracing::debug!(categories = blocks.len(), len = text.len(), "exported selection");
    Ok(text)
}

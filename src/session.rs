//! Per-session state: the cached reply and the checkbox choices.
//!
//! A `Session` is created when an interactive session starts and dropped
//! when it ends. Every operation goes through it; nothing is process-wide.

use tracing::{debug, info, warn};

use crate::checklist::{
    ParseResult, ReplyLine, SelectionState, TaskKey, export_selection, parse_response, reply_lines,
};
use crate::completion::CompletionClient;
use crate::error::{Result, TaskcatError};
use crate::prompt::build_prompt;

#[derive(Debug, Default)]
pub struct Session {
    raw_reply: Option<String>,
    selection: SelectionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-fetched reply, e.g. one saved to a file
    pub fn with_reply(raw_reply: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.raw_reply = Some(raw_reply.into());
        session.selection.register(&session.parse_result());
        session
    }

    /// Send the user's task text to the completion service.
    ///
    /// Blank text fails with [`TaskcatError::EmptyInput`] before any request.
    /// On failure the cached reply and the selection are left as they were.
    pub fn submit<C: CompletionClient + ?Sized>(&mut self, client: &C, tasks: &str) -> Result<()> {
        let tasks = tasks.trim();
        if tasks.is_empty() {
            debug!("submit: empty input, no request made");
            return Err(TaskcatError::EmptyInput);
        }

        let prompt = build_prompt(tasks);
        info!(input_len = tasks.len(), "requesting categorization");
        let reply = client.complete(&prompt).map_err(|e| {
            warn!(error = %e, "completion failed");
            TaskcatError::Completion(e)
        })?;

        self.raw_reply = Some(reply);
        let parsed = self.parse_result();
        self.selection.register(&parsed);
        info!(
            categories = parsed.categories.len(),
            tasks = parsed.task_count(),
            "reply parsed"
        );
        Ok(())
    }

    pub fn has_reply(&self) -> bool {
        self.raw_reply.is_some()
    }

    pub fn raw_reply(&self) -> Option<&str> {
        self.raw_reply.as_deref()
    }

    /// Parse the cached reply; re-derived on every call, never re-fetched
    pub fn parse_result(&self) -> ParseResult {
        self.raw_reply
            .as_deref()
            .map(parse_response)
            .unwrap_or_default()
    }

    /// Parse result with every task's `checked` flag filled in
    pub fn checklist(&self) -> ParseResult {
        self.selection.apply(&self.parse_result())
    }

    pub fn reply_lines(&self) -> Vec<ReplyLine> {
        self.raw_reply
            .as_deref()
            .map(reply_lines)
            .unwrap_or_default()
    }

    pub fn is_checked(&self, key: &TaskKey) -> bool {
        self.selection.get(key)
    }

    pub fn set_checked(&mut self, key: TaskKey, checked: bool) {
        self.selection.set(key, checked);
    }

    pub fn toggle(&mut self, key: &TaskKey) -> bool {
        let checked = self.selection.toggle(key);
        debug!(%key, checked, "toggled task");
        checked
    }

    pub fn checked_count(&self) -> usize {
        self.selection.checked_count(&self.parse_result())
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Export buffer for the currently checked tasks
    pub fn export(&self) -> Result<String> {
        export_selection(&self.parse_result(), &self.selection)
    }
}

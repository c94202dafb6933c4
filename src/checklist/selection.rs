use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::parser::ParseResult;

/// Separator used when a key is written as a single string
pub const KEY_SEPARATOR: &str = "::";

/// Stable identity of a task across re-renders: its category and label.
///
/// Two tasks with the same category and label share one key and therefore
/// one checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TaskKey {
    pub category: String,
    pub label: String,
}

impl TaskKey {
    pub fn new(category: &str, label: &str) -> Self {
        Self {
            category: category.to_string(),
            label: label.to_string(),
        }
    }

    /// Parse `<category>::<label>`, splitting on the first separator
    pub fn parse(s: &str) -> Option<Self> {
        let (category, label) = s.split_once(KEY_SEPARATOR)?;
        let (category, label) = (category.trim(), label.trim());
        if category.is_empty() || label.is_empty() {
            return None;
        }
        Some(Self::new(category, label))
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.category, KEY_SEPARATOR, self.label)
    }
}

/// Checkbox state for one session.
///
/// Entries are created the first time a task is rendered and are never
/// removed; keys left over from an earlier reply simply go unused.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    checked: HashMap<TaskKey, bool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &TaskKey) -> bool {
        self.checked.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: TaskKey, checked: bool) {
        self.checked.insert(key, checked);
    }

    /// Flip a task's checkbox and return the new value
    pub fn toggle(&mut self, key: &TaskKey) -> bool {
        let entry = self.checked.entry(key.clone()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Create unchecked entries for tasks seen for the first time
    pub fn register(&mut self, parsed: &ParseResult) {
        for task in parsed.tasks() {
            self.checked.entry(task.key()).or_insert(false);
        }
    }

    /// Copy of `parsed` with every task's `checked` flag filled in
    pub fn apply(&self, parsed: &ParseResult) -> ParseResult {
        let mut applied = parsed.clone();
        for category in &mut applied.categories {
            for task in &mut category.tasks {
                task.checked = self.get(&task.key());
            }
        }
        applied
    }

    /// Number of checked tasks present in `parsed`
    pub fn checked_count(&self, parsed: &ParseResult) -> usize {
        parsed.tasks().filter(|t| self.get(&t.key())).count()
    }

    /// Number of keys ever seen, orphans included
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}

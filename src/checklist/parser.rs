use serde::Serialize;
use std::collections::HashMap;

use super::selection::TaskKey;

const CATEGORY_MARKER: &str = "--";
const TASK_MARKER: &str = "- ";

/// One actionable line under a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskItem {
    pub category: String,
    /// Text after the `- ` marker, priority prefix included
    pub label: String,
    pub raw_line: String,
    pub checked: bool,
}

impl TaskItem {
    pub fn key(&self) -> TaskKey {
        TaskKey::new(&self.category, &self.label)
    }
}

/// A heading from the reply and the tasks listed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Full trimmed heading, `--` marker included
    pub name: String,
    pub tasks: Vec<TaskItem>,
}

impl Category {
    fn new(name: String) -> Self {
        Self {
            name,
            tasks: Vec::new(),
        }
    }
}

/// Categories in first-appearance order.
///
/// Category names act as the merge key: a repeated heading resets the
/// existing bucket in place instead of opening a second one, so tasks listed
/// under the first occurrence are lost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub categories: Vec<Category>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &TaskItem> {
        self.categories.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.categories.iter().map(|c| c.tasks.len()).sum()
    }

    /// Open `name` as a fresh, empty bucket
    fn open_category(&mut self, name: &str) -> usize {
        match self.categories.iter().position(|c| c.name == name) {
            Some(idx) => {
                self.categories[idx].tasks.clear();
                idx
            }
            None => {
                self.categories.push(Category::new(name.to_string()));
                self.categories.len() - 1
            }
        }
    }
}

/// How a single reply line is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Category heading, already trimmed
    Heading(&'a str),
    /// Task label with the marker stripped
    Task(&'a str),
    /// Any other text
    Note(&'a str),
    Blank,
}

/// Classify one line; the first matching rule wins
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with(CATEGORY_MARKER) {
        LineKind::Heading(trimmed)
    } else if let Some(label) = trimmed.strip_prefix(TASK_MARKER) {
        LineKind::Task(label)
    } else {
        LineKind::Note(trimmed)
    }
}

/// Parse a raw model reply into categories and tasks.
///
/// Total: any input produces a result. Task lines that appear before the
/// first heading have no category and are dropped.
pub fn parse_response(raw: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut current: Option<usize> = None;

    for line in raw.lines() {
        match classify_line(line) {
            LineKind::Heading(name) => {
                current = Some(result.open_category(name));
            }
            LineKind::Task(label) => {
                let Some(idx) = current else {
                    tracing::debug!(line, "dropping task line with no category");
                    continue;
                };
                let category = &mut result.categories[idx];
                category.tasks.push(TaskItem {
                    category: category.name.clone(),
                    label: label.to_string(),
                    raw_line: line.to_string(),
                    checked: false,
                });
            }
            LineKind::Note(_) | LineKind::Blank => {}
        }
    }

    result
}

/// A reply line as the checklist displays it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyLine {
    Heading(String),
    Task(TaskKey),
    /// Task under a heading that is repeated further down. The repeat resets
    /// the category, so this row is not part of the parse result and cannot
    /// be checked or exported.
    Superseded(TaskKey),
    Note(String),
}

/// Reply lines in display order, with blanks and orphan task lines removed
pub fn reply_lines(raw: &str) -> Vec<ReplyLine> {
    let mut last_heading: HashMap<&str, usize> = HashMap::new();
    for (idx, line) in raw.lines().enumerate() {
        if let LineKind::Heading(name) = classify_line(line) {
            last_heading.insert(name, idx);
        }
    }

    let mut lines = Vec::new();
    // Current heading and whether it is the last occurrence of its name
    let mut current: Option<(&str, bool)> = None;

    for (idx, line) in raw.lines().enumerate() {
        match classify_line(line) {
            LineKind::Heading(name) => {
                current = Some((name, last_heading.get(name) == Some(&idx)));
                lines.push(ReplyLine::Heading(name.to_string()));
            }
            LineKind::Task(label) => match current {
                Some((category, true)) => lines.push(ReplyLine::Task(TaskKey::new(category, label))),
                Some((category, false)) => {
                    lines.push(ReplyLine::Superseded(TaskKey::new(category, label)))
                }
                None => {}
            },
            LineKind::Note(text) => lines.push(ReplyLine::Note(text.to_string())),
            LineKind::Blank => {}
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(category: &Category) -> Vec<&str> {
        category.tasks.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn test_two_categories() {
        let result = parse_response("-- Work\n- High: Finish report\n-- Personal\n- Low: Buy milk\n");

        assert_eq!(result.categories.len(), 2);
        assert_eq!(result.categories[0].name, "-- Work");
        assert_eq!(labels(&result.categories[0]), ["High: Finish report"]);
        assert_eq!(result.categories[1].name, "-- Personal");
        assert_eq!(labels(&result.categories[1]), ["Low: Buy milk"]);
    }

    #[test]
    fn test_orphan_task_dropped() {
        let result = parse_response("- High: orphan task");
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_response("").is_empty());
        assert!(parse_response("\n\n   \n").is_empty());
    }

    #[test]
    fn test_commentary_ignored() {
        let raw = "Here is your organized list:\n\n-- Health\n- Medium: Book dentist\nStay hydrated!\n- Low: Stretch\n";
        let result = parse_response(raw);

        assert_eq!(result.categories.len(), 1);
        assert_eq!(labels(&result.categories[0]), ["Medium: Book dentist", "Low: Stretch"]);
    }

    #[test]
    fn test_indented_lines() {
        let result = parse_response("   -- Work\n    - High: Deploy\n");
        assert_eq!(result.categories[0].name, "-- Work");
        let task = &result.categories[0].tasks[0];
        assert_eq!(task.label, "High: Deploy");
        assert_eq!(task.raw_line, "    - High: Deploy");
        assert_eq!(task.category, "-- Work");
        assert!(!task.checked);
    }

    #[test]
    fn test_heading_without_space() {
        let result = parse_response("--Finance\n- High: Pay rent");
        assert_eq!(result.categories[0].name, "--Finance");
        assert_eq!(result.task_count(), 1);
    }

    #[test]
    fn test_dash_without_space_is_commentary() {
        let result = parse_response("-- Work\n-High: cramped\n- Low: fine");
        assert_eq!(labels(&result.categories[0]), ["Low: fine"]);
    }

    #[test]
    fn test_malformed_priority_passes_through() {
        let result = parse_response("-- Misc\n- Urgent!!: Call mom\n- no priority at all");
        assert_eq!(
            labels(&result.categories[0]),
            ["Urgent!!: Call mom", "no priority at all"]
        );
    }

    #[test]
    fn test_duplicate_category_resets_bucket() {
        let raw = "-- Work\n- High: A\n-- Home\n- Low: B\n-- Work\n- Medium: C\n";
        let result = parse_response(raw);

        assert_eq!(result.categories.len(), 2);
        assert_eq!(result.categories[0].name, "-- Work");
        assert_eq!(labels(&result.categories[0]), ["Medium: C"]);
        assert_eq!(result.categories[1].name, "-- Home");
    }

    #[test]
    fn test_empty_category_kept() {
        let result = parse_response("-- Empty\n-- Full\n- High: x");
        assert_eq!(result.categories.len(), 2);
        assert!(result.categories[0].tasks.is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let result = parse_response("-- Work\r\n- High: Finish report\r\n");
        assert_eq!(result.categories[0].name, "-- Work");
        assert_eq!(result.categories[0].tasks[0].label, "High: Finish report");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "intro\n-- A\n- High: 1\n- Low: 2\n-- B\n- Medium: 3\n";
        assert_eq!(parse_response(raw), parse_response(raw));
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("  "), LineKind::Blank);
        assert_eq!(classify_line(" -- Work "), LineKind::Heading("-- Work"));
        assert_eq!(classify_line("- High: x"), LineKind::Task("High: x"));
        assert_eq!(classify_line("---"), LineKind::Heading("---"));
        assert_eq!(classify_line("Note this"), LineKind::Note("Note this"));
    }

    #[test]
    fn test_reply_lines_keep_notes_in_order() {
        let raw = "- Low: orphan\nSure!\n-- Work\n- High: Ship\n\nDone.";
        let lines = reply_lines(raw);
        assert_eq!(
            lines,
            vec![
                ReplyLine::Note("Sure!".to_string()),
                ReplyLine::Heading("-- Work".to_string()),
                ReplyLine::Task(TaskKey::new("-- Work", "High: Ship")),
                ReplyLine::Note("Done.".to_string()),
            ]
        );
    }

    #[test]
    fn test_reply_lines_mark_tasks_under_repeated_heading() {
        let raw = "-- Work\n- High: A\n-- Home\n- Low: C\n-- Work\n- Low: B";
        let lines = reply_lines(raw);
        assert_eq!(
            lines,
            vec![
                ReplyLine::Heading("-- Work".to_string()),
                ReplyLine::Superseded(TaskKey::new("-- Work", "High: A")),
                ReplyLine::Heading("-- Home".to_string()),
                ReplyLine::Task(TaskKey::new("-- Home", "Low: C")),
                ReplyLine::Heading("-- Work".to_string()),
                ReplyLine::Task(TaskKey::new("-- Work", "Low: B")),
            ]
        );

        // Every checkable row is a task of the parse result
        let parsed = parse_response(raw);
        for line in &lines {
            if let ReplyLine::Task(key) = line {
                assert!(parsed.tasks().any(|t| &t.key() == key));
            }
        }
    }

    #[test]
    fn test_task_key_from_item() {
        let result = parse_response("-- Work\n- High: Finish report");
        let key = result.categories[0].tasks[0].key();
        assert_eq!(key, TaskKey::new("-- Work", "High: Finish report"));
    }
}

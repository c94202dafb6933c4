use crate::checklist::{ReplyLine, SelectionState};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Read};

/// Read text from a file path, or from stdin for `None` / `-`
pub fn read_source(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read from stdin")?;
            Ok(content)
        }
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("Failed to read {}", p)),
    }
}

/// Resolve task text from the positional argument or `--file`
pub fn resolve_tasks(tasks: Option<String>, file: Option<String>) -> Result<String> {
    match (tasks, file) {
        (Some(_), Some(_)) => anyhow::bail!("Pass task text or --file, not both"),
        (Some(t), None) if t == "-" => read_source(None),
        (Some(t), None) => Ok(t),
        (None, Some(f)) => read_source(Some(&f)),
        (None, None) => read_source(None),
    }
}

/// Print reply lines as a checklist: headings bold, tasks with boxes, notes dimmed
pub fn print_checklist(lines: &[ReplyLine], selection: &SelectionState) {
    if lines.is_empty() {
        println!("No tasks found in reply.");
        return;
    }

    let mut first = true;
    for line in lines {
        match line {
            ReplyLine::Heading(name) => {
                if !first {
                    println!();
                }
                println!("{}", name.bold());
            }
            ReplyLine::Task(key) => {
                let checkbox = if selection.get(key) {
                    "[x]".green()
                } else {
                    "[ ]".dimmed()
                };
                println!("{} {}", checkbox, colorize_label(&key.label));
            }
            ReplyLine::Superseded(key) => {
                println!("{} {}", "[-]".dimmed(), key.label.dimmed().strikethrough());
            }
            ReplyLine::Note(text) => println!("{}", text.dimmed()),
        }
        first = false;
    }
}

/// Colour a leading `High:`/`Medium:`/`Low:`; other labels print as-is
fn colorize_label(label: &str) -> String {
    let Some((level, rest)) = label.split_once(':') else {
        return label.to_string();
    };
    let level = match level.trim() {
        "High" => level.red().bold(),
        "Medium" => level.yellow(),
        "Low" => level.dimmed(),
        _ => return label.to_string(),
    };
    format!("{}:{}", level, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tasks_inline() {
        let tasks = resolve_tasks(Some("buy milk".to_string()), None).unwrap();
        assert_eq!(tasks, "buy milk");
    }

    #[test]
    fn test_resolve_tasks_rejects_both() {
        assert!(resolve_tasks(Some("x".to_string()), Some("f.txt".to_string())).is_err());
    }

    #[test]
    fn test_resolve_tasks_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.txt");
        std::fs::write(&path, "call mom\n").unwrap();

        let tasks = resolve_tasks(None, Some(path.to_string_lossy().into_owned())).unwrap();
        assert_eq!(tasks, "call mom\n");
    }

    #[test]
    fn test_colorize_label_keeps_unknown_levels() {
        colored::control::set_override(false);
        assert_eq!(colorize_label("Urgent: now"), "Urgent: now");
        assert_eq!(colorize_label("no colon"), "no colon");
        assert_eq!(colorize_label("High: ship"), "High: ship");
    }
}

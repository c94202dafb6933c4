use crate::checklist::TaskKey;
use crate::clipboard::copy_to_clipboard;
use crate::session::Session;
use anyhow::{Context, Result};
use colored::Colorize;

use super::utils::read_source;

pub fn handle_export(file: Option<String>, check: Vec<String>, all: bool, copy: bool) -> Result<()> {
    let reply = read_source(file.as_deref())?;
    let mut session = Session::with_reply(reply);

    if all {
        let keys: Vec<TaskKey> = session.parse_result().tasks().map(|t| t.key()).collect();
        for key in keys {
            session.set_checked(key, true);
        }
    }

    for entry in &check {
        let key = TaskKey::parse(entry)
            .with_context(|| format!("Invalid task '{}', expected \"<category>::<label>\"", entry))?;
        let known = session.parse_result().tasks().any(|t| t.key() == key);
        if !known {
            eprintln!("{} no task matches '{}'", "Warning:".yellow().bold(), key);
        }
        session.set_checked(key, true);
    }

    let text = session.export()?;
    println!("{}", text);

    if copy {
        copy_to_clipboard(&text)?;
        eprintln!("{}", "Tasks copied to clipboard!".green());
    }
    Ok(())
}

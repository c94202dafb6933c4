use crate::error::TaskcatError;
use crate::prompt::build_prompt;
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_checklist, resolve_tasks};

pub fn handle_categorize(
    ctx: &CommandContext,
    tasks: Option<String>,
    file: Option<String>,
    json: bool,
    raw: bool,
    dry_run: bool,
) -> Result<()> {
    let tasks = resolve_tasks(tasks, file)?;
    if tasks.trim().is_empty() {
        return Err(TaskcatError::EmptyInput.into());
    }

    if dry_run {
        println!("{}", "[DRY RUN] Prompt that would be sent:".cyan().bold());
        println!();
        print!("{}", build_prompt(&tasks));
        return Ok(());
    }

    let client = ctx.client()?;
    let mut session = Session::new();
    eprintln!("{}", "Organizing your tasks...".dimmed());
    session.submit(&client, &tasks)?;

    if raw {
        println!("{}", session.raw_reply().unwrap_or_default().trim_end());
    } else if json {
        println!("{}", serde_json::to_string_pretty(&session.checklist())?);
    } else {
        println!("{}", "Organized Task List:".green().bold());
        println!();
        print_checklist(&session.reply_lines(), session.selection());
    }
    Ok(())
}

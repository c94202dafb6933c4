use crate::session::Session;
use anyhow::Result;

use super::utils::{print_checklist, read_source};

pub fn handle_render(file: Option<String>, json: bool) -> Result<()> {
    let reply = read_source(file.as_deref())?;
    let session = Session::with_reply(reply);

    if json {
        println!("{}", serde_json::to_string_pretty(&session.checklist())?);
    } else {
        print_checklist(&session.reply_lines(), session.selection());
    }
    Ok(())
}

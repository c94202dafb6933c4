use crate::tui::app::App;
use crate::tui::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Handle Editing mode key events
/// Returns Ok(true) if the application should quit, Ok(false) otherwise
pub fn handle_editing(
    app: &mut App,
    key: KeyEvent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> io::Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::F(5) => submit(app, terminal)?,
        KeyCode::Char('s') if ctrl => submit(app, terminal)?,
        KeyCode::Char('u') if ctrl => {
            app.clear_input();
        }
        KeyCode::Esc | KeyCode::Tab => {
            app.focus_checklist();
        }
        KeyCode::Enter => {
            app.insert_char('\n');
        }
        KeyCode::Backspace => {
            app.backspace();
        }
        KeyCode::Char(c) if !ctrl => {
            app.insert_char(c);
        }
        _ => {}
    }

    Ok(false)
}

fn submit(app: &mut App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    app.begin_submit();
    if app.busy {
        // Show the busy message while the request blocks
        terminal.draw(|f| ui::draw(f, app))?;
    }
    app.submit();
    Ok(())
}

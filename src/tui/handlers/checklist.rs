use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use std::io;

/// Handle Checklist mode key events
/// Returns Ok(true) if the application should quit, Ok(false) otherwise
pub fn handle_checklist(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Down | KeyCode::Char('j') => {
            app.next();
            app.clear_message();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous();
            app.clear_message();
        }
        KeyCode::Home | KeyCode::Char('g') => app.first(),
        KeyCode::End | KeyCode::Char('G') => app.last(),
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }
        KeyCode::Char('c') | KeyCode::Char('y') => {
            app.build_export();
        }
        KeyCode::Char('i') | KeyCode::Tab | KeyCode::Esc => {
            app.focus_editor();
        }
        _ => {}
    }

    Ok(false)
}

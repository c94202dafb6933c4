use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use std::io;

/// Handle Export mode key events
/// Returns Ok(true) if the application should quit, Ok(false) otherwise
pub fn handle_export_view(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('y') | KeyCode::Char('c') | KeyCode::Enter => {
            app.copy_export();
        }
        KeyCode::Esc | KeyCode::Backspace => {
            app.close_export();
        }
        _ => {}
    }

    Ok(false)
}

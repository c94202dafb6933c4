//! Central theme configuration for the TUI.
//!
//! All colors and styles are defined here to keep the views consistent.

use ratatui::style::{Color, Modifier, Style};

use super::app::{InputMode, MessageKind};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,
    pub selection_indicator: Color,
    pub title: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub heading: Color,

    // Priority prefixes (display only)
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,

    // Checkbox colors
    pub checkbox_checked: Color,
    pub checkbox_unchecked: Color,

    // Messages
    pub message_info: Color,
    pub message_success: Color,
    pub message_warning: Color,
    pub message_error: Color,

    // Footer/Mode colors
    pub mode_editing: (Color, Color), // (bg, fg)
    pub mode_checklist: (Color, Color),
    pub mode_export: (Color, Color),
    pub mode_busy: (Color, Color),

    // Export popup
    pub export_border: Color,
    pub cursor: Color,

    // Help popup
    pub help_key: Color,
    pub help_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Monokai
        Self {
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),
            selection_indicator: Color::Rgb(166, 226, 46),
            title: Color::Rgb(102, 217, 239),

            text: Color::Rgb(248, 248, 242),
            text_muted: Color::Rgb(117, 113, 94),
            heading: Color::Rgb(174, 129, 255),

            priority_high: Color::Rgb(249, 38, 114),
            priority_medium: Color::Rgb(230, 219, 116),
            priority_low: Color::Rgb(117, 113, 94),

            checkbox_checked: Color::Rgb(166, 226, 46),
            checkbox_unchecked: Color::Rgb(117, 113, 94),

            message_info: Color::Rgb(102, 217, 239),
            message_success: Color::Rgb(166, 226, 46),
            message_warning: Color::Rgb(253, 151, 31),
            message_error: Color::Rgb(249, 38, 114),

            mode_editing: (Color::Rgb(230, 219, 116), Color::Rgb(39, 40, 34)),
            mode_checklist: (Color::Rgb(102, 217, 239), Color::Rgb(39, 40, 34)),
            mode_export: (Color::Rgb(166, 226, 46), Color::Rgb(39, 40, 34)),
            mode_busy: (Color::Rgb(253, 151, 31), Color::Rgb(39, 40, 34)),

            export_border: Color::Rgb(102, 217, 239),
            cursor: Color::Rgb(102, 217, 239),

            help_key: Color::Rgb(102, 217, 239),
            help_border: Color::Rgb(230, 219, 116),
        }
    }
}

impl Theme {
    /// Colour for a recognised `High`/`Medium`/`Low` prefix
    pub fn priority_color(&self, level: &str) -> Option<Color> {
        match level.trim() {
            "High" => Some(self.priority_high),
            "Medium" => Some(self.priority_medium),
            "Low" => Some(self.priority_low),
            _ => None,
        }
    }

    pub fn message_color(&self, kind: MessageKind) -> Color {
        match kind {
            MessageKind::Info => self.message_info,
            MessageKind::Success => self.message_success,
            MessageKind::Warning => self.message_warning,
            MessageKind::Error => self.message_error,
        }
    }

    /// (label, bg, fg) for the footer mode indicator
    pub fn mode_indicator(&self, mode: InputMode, busy: bool) -> (&'static str, Color, Color) {
        if busy {
            return (" BUSY ", self.mode_busy.0, self.mode_busy.1);
        }
        match mode {
            InputMode::Editing => (" EDIT ", self.mode_editing.0, self.mode_editing.1),
            InputMode::Checklist => (" CHECKLIST ", self.mode_checklist.0, self.mode_checklist.1),
            InputMode::Export => (" EXPORT ", self.mode_export.0, self.mode_export.1),
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn checkbox_style(&self, checked: bool) -> Style {
        Style::default().fg(if checked {
            self.checkbox_checked
        } else {
            self.checkbox_unchecked
        })
    }

    /// Border style for blocks
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_color_known_levels() {
        let t = Theme::default();
        assert_eq!(t.priority_color("High"), Some(t.priority_high));
        assert_eq!(t.priority_color(" Medium"), Some(t.priority_medium));
        assert_eq!(t.priority_color("Low"), Some(t.priority_low));
        assert_eq!(t.priority_color("Urgent"), None);
    }

    #[test]
    fn test_busy_overrides_mode() {
        let t = Theme::default();
        assert_eq!(t.mode_indicator(InputMode::Checklist, true).0, " BUSY ");
        assert_eq!(t.mode_indicator(InputMode::Export, false).0, " EXPORT ");
    }
}

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};

use super::theme::theme;

/// Split a task label into spans, colouring a recognised priority prefix.
///
/// The label text itself is never changed; unknown prefixes render plain.
pub fn label_spans(label: &str, checked: bool) -> Vec<Span<'_>> {
    let t = theme();
    let base = if checked {
        Style::default().fg(t.text_muted).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(t.text)
    };

    if let Some((level, rest)) = label.split_once(':')
        && let Some(color) = t.priority_color(level)
    {
        let level_style = if checked {
            base
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };
        return vec![
            Span::styled(level, level_style),
            Span::styled(":", base),
            Span::styled(rest, base),
        ];
    }

    vec![Span::styled(label, base)]
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ratatui::layout::Constraint::Percentage(percent_y),
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ratatui::layout::Constraint::Percentage(percent_x),
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

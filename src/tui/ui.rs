use super::app::{App, InputMode};
use super::theme::theme;
use super::ui_utils;
use crate::checklist::ReplyLine;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(10), // Task input
            Constraint::Min(0),     // Checklist
            Constraint::Length(1),  // Footer
        ])
        .split(f.area());

    draw_title(f, app, chunks[0]);
    draw_input(f, app, chunks[1]);
    draw_checklist(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);

    if app.input_mode == InputMode::Export {
        draw_export_popup(f, app);
    }

    if app.show_help {
        draw_help_popup(f);
    }
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let title = if app.settings.use_emojis {
        " 🧠 AI Task Categorizer & Prioritizer"
    } else {
        " AI Task Categorizer & Prioritizer"
    };
    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default().fg(t.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Paste your tasks; they will be grouped by category with a priority each.",
            Style::default().fg(t.text_muted),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.input_mode == InputMode::Editing;

    let mut text = Text::default();
    for line in app.input.split('\n') {
        text.lines.push(Line::from(Span::styled(line, Style::default().fg(t.text))));
    }
    if focused && let Some(last) = text.lines.last_mut() {
        last.spans.push(Span::styled("_", Style::default().fg(t.cursor)));
    }

    // Keep the cursor line visible
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = text.lines.len().saturating_sub(inner_height) as u16;

    let title = if app.settings.use_emojis {
        " ✍️ Enter your tasks "
    } else {
        " Enter your tasks "
    };
    let input = Paragraph::new(text)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(focused)),
        )
        .scroll((scroll, 0));

    f.render_widget(input, area);
}

fn draw_checklist(f: &mut Frame, app: &mut App, area: Rect) {
    let t = theme();
    let focused = app.input_mode == InputMode::Checklist;
    let rows = app.rows();

    let block = Block::default()
        .title(format!(
            " Organized Task List ({} selected) ",
            app.session.checked_count()
        ))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(t.border_style(focused));

    if rows.is_empty() {
        let hint = if app.session.has_reply() {
            "The reply contained nothing to check off."
        } else {
            "Type your tasks above and press Ctrl+S to organize them."
        };
        let empty = Paragraph::new(Span::styled(hint, Style::default().fg(t.text_muted)))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    }

    let mut task_index = 0;
    let mut selected_row = None;
    let mut first_heading = true;
    let mut items: Vec<ListItem> = Vec::with_capacity(rows.len());

    for row in &rows {
        match row {
            ReplyLine::Heading(name) => {
                if !first_heading {
                    items.push(ListItem::new(Line::from("")));
                }
                first_heading = false;
                items.push(ListItem::new(Line::from(Span::styled(
                    name.as_str(),
                    t.heading_style(),
                ))));
            }
            ReplyLine::Task(key) => {
                let checked = app.session.is_checked(key);
                let is_selected = focused && task_index == app.selected_index;
                if task_index == app.selected_index {
                    selected_row = Some(items.len());
                }

                let indicator = if is_selected {
                    Span::styled("▌", Style::default().fg(t.selection_indicator))
                } else {
                    Span::raw(" ")
                };
                let checkbox = if checked { "[x] " } else { "[ ] " };

                let mut spans = vec![
                    indicator,
                    Span::raw(" "),
                    Span::styled(checkbox, t.checkbox_style(checked)),
                ];
                spans.extend(ui_utils::label_spans(&key.label, checked));

                let mut item = ListItem::new(Line::from(spans));
                if is_selected {
                    item = item.style(Style::default().add_modifier(Modifier::BOLD));
                }
                items.push(item);
                task_index += 1;
            }
            ReplyLine::Superseded(key) => {
                items.push(ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("[-] {}", key.label),
                        Style::default()
                            .fg(t.text_muted)
                            .add_modifier(Modifier::CROSSED_OUT),
                    ),
                ])));
            }
            ReplyLine::Note(text) => {
                items.push(ListItem::new(Line::from(Span::styled(
                    text.as_str(),
                    Style::default()
                        .fg(t.text_muted)
                        .add_modifier(Modifier::ITALIC),
                ))));
            }
        }
    }

    app.list_state.select(selected_row);
    let list = List::new(items).block(block);
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let (label, bg, fg) = t.mode_indicator(app.input_mode, app.busy);
    let mode_indicator = Span::styled(label, Style::default().bg(bg).fg(fg));

    let help_text = match app.input_mode {
        InputMode::Editing => " Ctrl+S/F5:organize  Enter:newline  Ctrl+U:clear  Tab:checklist  Ctrl+C:quit ",
        InputMode::Checklist => " ↑↓:nav  Space:check  c:copy selected  i:edit tasks  ?:help  q:quit ",
        InputMode::Export => " y/Enter:copy to clipboard  Esc:back  q:quit ",
    };

    let mut footer_spans = vec![mode_indicator];

    if let Some(ref msg) = app.message {
        footer_spans.push(Span::raw(" "));
        footer_spans.push(Span::styled(
            msg.text.as_str(),
            Style::default()
                .fg(t.message_color(msg.kind))
                .add_modifier(Modifier::BOLD),
        ));
    }

    footer_spans.push(Span::styled(help_text, Style::default().fg(t.text_muted)));

    f.render_widget(Paragraph::new(Line::from(footer_spans)), area);
}

fn draw_export_popup(f: &mut Frame, app: &App) {
    let Some(text) = app.export_text.as_deref() else {
        return;
    };
    let area = ui_utils::centered_rect(70, 60, f.area());
    let t = theme();

    let title = if app.settings.use_emojis {
        " 📋 Copied Tasks (Read-only) "
    } else {
        " Copied Tasks (Read-only) "
    };
    let popup = Paragraph::new(text)
        .style(Style::default().fg(t.text))
        .block(
            Block::default()
                .title(title)
                .title_bottom(Line::from(" y: copy to clipboard  Esc: close ").centered())
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.export_border)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = ui_utils::centered_rect(60, 60, f.area());
    let t = theme();
    let key_style = Style::default().fg(t.help_key);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Task input",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(vec![
            Span::styled("Ctrl+S  ", key_style),
            Span::raw("Categorize & prioritize"),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+U  ", key_style),
            Span::raw("Clear input"),
        ]),
        Line::from(vec![
            Span::styled("Tab     ", key_style),
            Span::raw("Go to checklist"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Checklist",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(vec![
            Span::styled("↑/↓     ", key_style),
            Span::raw("Move up/down"),
        ]),
        Line::from(vec![
            Span::styled("Space   ", key_style),
            Span::raw("Check / uncheck task"),
        ]),
        Line::from(vec![
            Span::styled("c       ", key_style),
            Span::raw("Copy selected tasks"),
        ]),
        Line::from(vec![
            Span::styled("i       ", key_style),
            Span::raw("Edit tasks"),
        ]),
        Line::from(vec![
            Span::styled("[-]     ", key_style),
            Span::raw("Task under a repeated category; not exported"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("?       ", key_style),
            Span::raw("Toggle help"),
        ]),
        Line::from(vec![
            Span::styled("Esc     ", key_style),
            Span::raw("Close / Back"),
        ]),
        Line::from(vec![Span::styled("q       ", key_style), Span::raw("Quit")]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.help_border)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

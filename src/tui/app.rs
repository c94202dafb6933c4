use super::{handlers, ui};
use crate::{
    checklist::{ReplyLine, TaskKey},
    clipboard::copy_to_clipboard,
    completion::CompletionClient,
    config::{TaskcatConfig, TuiSettings},
    error::{Result, TaskcatError},
    session::Session,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::ListState};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the raw task list
    Editing,
    /// Navigating and ticking the organized tasks
    Checklist,
    /// Read-only export text with copy action
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub struct App {
    pub session: Session,
    client: Box<dyn CompletionClient>,
    pub settings: TuiSettings,
    pub input: String,
    pub input_mode: InputMode,
    pub selected_index: usize, // Index into task rows only
    pub list_state: ListState,
    pub export_text: Option<String>,
    pub busy: bool,
    pub show_help: bool,
    pub message: Option<Message>,
}

impl App {
    pub fn new(config: &TaskcatConfig, client: Box<dyn CompletionClient>) -> Self {
        Self {
            session: Session::new(),
            client,
            settings: config.tui.clone(),
            input: String::new(),
            input_mode: InputMode::Editing,
            selected_index: 0,
            list_state: ListState::default(),
            export_text: None,
            busy: false,
            show_help: false,
            message: None,
        }
    }

    /// Reply lines for the checklist, re-derived from the cached reply
    pub fn rows(&self) -> Vec<ReplyLine> {
        self.session.reply_lines()
    }

    /// Keys of the checkbox rows, in display order
    pub fn task_keys(&self) -> Vec<TaskKey> {
        self.rows()
            .into_iter()
            .filter_map(|row| match row {
                ReplyLine::Task(key) => Some(key),
                _ => None,
            })
            .collect()
    }

    pub fn selected_key(&self) -> Option<TaskKey> {
        self.task_keys().into_iter().nth(self.selected_index)
    }

    pub fn next(&mut self) {
        let count = self.task_keys().len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.task_keys().len();
        if count > 0 {
            self.selected_index = if self.selected_index == 0 {
                count - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    pub fn first(&mut self) {
        self.selected_index = 0;
    }

    pub fn last(&mut self) {
        self.selected_index = self.task_keys().len().saturating_sub(1);
    }

    pub fn toggle_selected(&mut self) {
        if let Some(key) = self.selected_key() {
            self.session.toggle(&key);
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Switch from the editor to the checklist when there is one to show
    pub fn focus_checklist(&mut self) {
        if self.session.has_reply() {
            self.input_mode = InputMode::Checklist;
        } else {
            self.set_message(MessageKind::Info, "Submit your tasks first (Ctrl+S)");
        }
    }

    pub fn focus_editor(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    /// Mark the app busy so the next frame shows progress before the blocking call
    pub fn begin_submit(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        self.busy = true;
        self.set_message(MessageKind::Info, "Organizing your tasks...");
    }

    /// Send the current input to the completion service
    pub fn submit(&mut self) {
        let result = self.session.submit(self.client.as_ref(), &self.input);
        self.busy = false;

        match result {
            Ok(()) => {
                self.selected_index = 0;
                self.export_text = None;
                self.input_mode = InputMode::Checklist;
                let text = if self.session.parse_result().is_empty() {
                    "The reply contained no categorized tasks"
                } else {
                    "Organized task list"
                };
                self.set_message(MessageKind::Success, text);
            }
            Err(TaskcatError::EmptyInput) => {
                self.set_message(MessageKind::Warning, TaskcatError::EmptyInput.to_string());
            }
            Err(e) => {
                self.set_message(MessageKind::Error, e.to_string());
            }
        }
    }

    /// Build the export buffer from the checked tasks
    pub fn build_export(&mut self) {
        match self.session.export() {
            Ok(text) => {
                self.export_text = Some(text);
                self.input_mode = InputMode::Export;
                self.message = None;
            }
            Err(e @ TaskcatError::NoSelection) => {
                self.export_text = None;
                self.set_message(MessageKind::Warning, e.to_string());
            }
            Err(e) => {
                self.set_message(MessageKind::Error, e.to_string());
            }
        }
    }

    pub fn close_export(&mut self) {
        self.input_mode = InputMode::Checklist;
    }

    pub fn copy_export(&mut self) {
        let Some(text) = self.export_text.clone() else {
            return;
        };
        match copy_to_clipboard(&text) {
            Ok(()) => self.set_message(MessageKind::Success, "Tasks copied to clipboard!"),
            Err(e) => self.set_message(MessageKind::Error, e.to_string()),
        }
    }

    pub fn set_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.message = Some(Message::new(kind, text));
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

pub fn run_tui(config: TaskcatConfig, client: impl CompletionClient + 'static) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, Box::new(client));
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }

            if app.show_help {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    app.show_help = false;
                }
                continue;
            }

            let quit = match app.input_mode {
                InputMode::Editing => handlers::handle_editing(app, key, terminal)?,
                InputMode::Checklist => handlers::handle_checklist(app, key)?,
                InputMode::Export => handlers::handle_export_view(app, key)?,
            };
            if quit {
                return Ok(());
            }
        }
    }
}

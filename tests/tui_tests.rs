use std::cell::RefCell;
use std::rc::Rc;

use taskcat::{
    checklist::TaskKey,
    completion::{CompletionClient, CompletionError},
    config::TaskcatConfig,
    tui::app::{App, InputMode, MessageKind},
};

const REPLY: &str = "Sure! Here you go:\n\n-- Work\n- High: Finish report\n- Medium: Email Sam\n\n-- Personal\n- Low: Buy milk\n";

/// Scripted client sharing its call log with the test
struct ScriptedClient {
    replies: RefCell<Vec<Result<String, CompletionError>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl CompletionClient for ScriptedClient {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.calls.borrow_mut().push(prompt.to_string());
        let mut replies = self.replies.borrow_mut();
        if replies.is_empty() {
            return Err(CompletionError::InvalidResponse("no reply".to_string()));
        }
        replies.remove(0)
    }
}

/// Helper to create a test app whose client answers with `replies` in order
fn create_test_app(
    replies: Vec<Result<String, CompletionError>>,
) -> (App, Rc<RefCell<Vec<String>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let client = ScriptedClient {
        replies: RefCell::new(replies),
        calls: Rc::clone(&calls),
    };
    let app = App::new(&TaskcatConfig::default(), Box::new(client));
    (app, calls)
}

fn submitted_app() -> (App, Rc<RefCell<Vec<String>>>) {
    let (mut app, calls) = create_test_app(vec![Ok(REPLY.to_string())]);
    app.input = "finish report\nemail sam\nbuy milk".to_string();
    app.begin_submit();
    app.submit();
    (app, calls)
}

// ============================================================================
// Submitting
// ============================================================================

#[test]
fn test_initial_state() {
    let (app, _calls) = create_test_app(vec![]);

    assert_eq!(app.input_mode, InputMode::Editing);
    assert!(!app.session.has_reply());
    assert!(app.rows().is_empty());
    assert!(app.message.is_none());
}

#[test]
fn test_submit_moves_to_checklist() {
    let (app, calls) = submitted_app();

    assert_eq!(app.input_mode, InputMode::Checklist);
    assert!(!app.busy);
    assert_eq!(app.task_keys().len(), 3);
    assert_eq!(app.message.as_ref().unwrap().kind, MessageKind::Success);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("finish report\nemail sam\nbuy milk"));
}

#[test]
fn test_empty_submit_warns_without_request() {
    let (mut app, calls) = create_test_app(vec![Ok(REPLY.to_string())]);
    app.input = "  \n\t ".to_string();

    app.begin_submit();
    assert!(!app.busy);
    app.submit();

    assert!(calls.borrow().is_empty());
    assert_eq!(app.input_mode, InputMode::Editing);
    let message = app.message.as_ref().unwrap();
    assert_eq!(message.kind, MessageKind::Warning);
    assert_eq!(message.text, "Please enter some tasks.");
}

#[test]
fn test_failed_submit_keeps_previous_checklist() {
    let (mut app, calls) = create_test_app(vec![
        Ok(REPLY.to_string()),
        Err(CompletionError::Api {
            status: 500,
            message: "upstream exploded".to_string(),
        }),
    ]);
    app.input = "finish report".to_string();
    app.submit();
    app.toggle_selected();
    assert_eq!(app.session.checked_count(), 1);

    app.focus_editor();
    app.submit();

    assert_eq!(calls.borrow().len(), 2);
    let message = app.message.as_ref().unwrap();
    assert_eq!(message.kind, MessageKind::Error);
    assert!(message.text.starts_with("Something went wrong:"));
    assert!(message.text.contains("upstream exploded"));

    assert_eq!(app.session.raw_reply(), Some(REPLY));
    assert_eq!(app.session.checked_count(), 1);
}

#[test]
fn test_resubmit_keeps_matching_checks() {
    let second = "-- Work\n- High: Finish report\n- Low: Water plants\n";
    let (mut app, _calls) =
        create_test_app(vec![Ok(REPLY.to_string()), Ok(second.to_string())]);
    app.input = "anything".to_string();
    app.submit();
    app.toggle_selected();

    app.submit();

    let finish = TaskKey::new("-- Work", "High: Finish report");
    let water = TaskKey::new("-- Work", "Low: Water plants");
    assert!(app.session.is_checked(&finish));
    assert!(!app.session.is_checked(&water));
    assert_eq!(app.session.checked_count(), 1);
}

#[test]
fn test_focus_checklist_needs_reply() {
    let (mut app, _calls) = create_test_app(vec![]);

    app.focus_checklist();

    assert_eq!(app.input_mode, InputMode::Editing);
    assert_eq!(app.message.as_ref().unwrap().kind, MessageKind::Info);
}

// ============================================================================
// Navigation and Toggling
// ============================================================================

#[test]
fn test_navigation_wraps() {
    let (mut app, _calls) = submitted_app();
    assert_eq!(app.selected_index, 0);

    app.next();
    app.next();
    assert_eq!(app.selected_index, 2);
    app.next();
    assert_eq!(app.selected_index, 0);

    app.previous();
    assert_eq!(app.selected_index, 2);

    app.first();
    assert_eq!(app.selected_index, 0);
    app.last();
    assert_eq!(app.selected_index, 2);
}

#[test]
fn test_navigation_on_empty_checklist() {
    let (mut app, _calls) = create_test_app(vec![]);

    app.next();
    app.previous();
    app.last();
    app.toggle_selected();

    assert_eq!(app.selected_index, 0);
    assert_eq!(app.session.checked_count(), 0);
}

#[test]
fn test_toggle_selected_task() {
    let (mut app, _calls) = submitted_app();
    app.next();

    let key = app.selected_key().unwrap();
    assert_eq!(key, TaskKey::new("-- Work", "Medium: Email Sam"));

    app.toggle_selected();
    assert!(app.session.is_checked(&key));
    app.toggle_selected();
    assert!(!app.session.is_checked(&key));
}

#[test]
fn test_task_keys_skip_headings_and_notes() {
    let (app, _calls) = submitted_app();

    let keys: Vec<String> = app.task_keys().iter().map(|k| k.to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "-- Work::High: Finish report",
            "-- Work::Medium: Email Sam",
            "-- Personal::Low: Buy milk",
        ]
    );
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_without_selection_warns() {
    let (mut app, _calls) = submitted_app();

    app.build_export();

    assert_eq!(app.input_mode, InputMode::Checklist);
    assert!(app.export_text.is_none());
    let message = app.message.as_ref().unwrap();
    assert_eq!(message.kind, MessageKind::Warning);
    assert_eq!(message.text, "No tasks selected to copy.");
}

#[test]
fn test_export_opens_read_only_view() {
    let (mut app, _calls) = submitted_app();
    app.toggle_selected();
    app.last();
    app.toggle_selected();

    app.build_export();

    assert_eq!(app.input_mode, InputMode::Export);
    assert_eq!(
        app.export_text.as_deref(),
        Some("-- Work\n- High: Finish report\n\n-- Personal\n- Low: Buy milk")
    );

    app.close_export();
    assert_eq!(app.input_mode, InputMode::Checklist);
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_input_editing() {
    let (mut app, _calls) = create_test_app(vec![]);

    for c in "buy\nmilk".chars() {
        app.insert_char(c);
    }
    assert_eq!(app.input, "buy\nmilk");

    app.backspace();
    assert_eq!(app.input, "buy\nmil");

    app.clear_input();
    assert!(app.input.is_empty());
}

#[test]
fn test_repeated_category_rows_are_not_selectable() {
    let reply = "-- Work\n- High: A\n-- Work\n- Low: B\n";
    let (mut app, _calls) = create_test_app(vec![Ok(reply.to_string())]);
    app.input = "a, b".to_string();
    app.submit();

    assert_eq!(app.task_keys(), vec![TaskKey::new("-- Work", "Low: B")]);

    app.toggle_selected();
    assert_eq!(app.session.checked_count(), 1);

    app.build_export();
    assert_eq!(app.input_mode, InputMode::Export);
    assert_eq!(app.export_text.as_deref(), Some("-- Work\n- Low: B"));
}

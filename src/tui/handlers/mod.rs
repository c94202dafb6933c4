mod checklist;
mod editing;
mod export_view;

pub use checklist::handle_checklist;
pub use editing::handle_editing;
pub use export_view::handle_export_view;

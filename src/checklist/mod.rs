//! Reply parsing, checkbox state and export.
//!
//! The grammar shared by the model reply and the export text:
//!
//! ```text
//! -- Work
//! - High: Finish report
//!
//! -- Personal
//! - Low: Buy milk
//! ```

mod export;
mod parser;
mod selection;

pub use export::export_selection;
pub use parser::{
    Category, LineKind, ParseResult, ReplyLine, TaskItem, classify_line, parse_response,
    reply_lines,
};
pub use selection::{KEY_SEPARATOR, SelectionState, TaskKey};

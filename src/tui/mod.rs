//! Terminal user interface for taskcat.
//!
//! Type or paste a task list, let the completion service organize it, tick
//! off the tasks that matter and copy them out.
//!
//! ## Usage
//!
//! ```bash
//! taskcat tui
//! ```
//!
//! ## Keybindings
//!
//! - `Ctrl+S` / `F5`: Organize the typed tasks
//! - `Tab`: Switch between input and checklist
//! - `↑/↓`: Navigate tasks
//! - `Space`: Check / uncheck
//! - `c`: Export checked tasks
//! - `y`: Copy export to clipboard
//! - `?`: Help
//! - `q`: Quit

pub mod app;
mod handlers;
pub mod theme;
mod ui;
mod ui_utils;

pub use app::run_tui;

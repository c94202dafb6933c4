//! # taskcat - AI task categorizer & prioritizer
//!
//! taskcat takes a free-text list of tasks, asks a language model to group
//! them under categories with a High/Medium/Low priority each, and turns the
//! reply into a checklist. Checked tasks can be exported back out as text.
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//!
//! # Interactive checklist
//! taskcat
//!
//! # One-shot
//! taskcat categorize "finish report, buy milk, book dentist"
//!
//! # Work with a saved reply offline
//! taskcat render reply.txt
//! taskcat export reply.txt --check "-- Work::High: Finish report"
//! ```
//!
//! ## Modules
//!
//! - [`checklist`]: Reply parsing, checkbox state and export
//! - [`completion`]: Completion service client
//! - [`prompt`]: Instruction template
//! - [`session`]: Per-session state tying the pieces together
//! - [`tui`]: Terminal user interface

/// Reply parsing, selection state and export formatting.
pub mod checklist;

/// Command-line interface definitions using clap.
pub mod cli;

pub mod clipboard;

/// Completion service client.
///
/// Defines the `CompletionClient` trait and the OpenAI implementation.
pub mod completion;

/// Configuration loading and management.
///
/// Handles `.taskcat.yml` configuration files and credential lookup.
pub mod config;

/// Error types and result aliases.
///
/// Defines `TaskcatError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;
pub mod prompt;
pub mod session;

/// Terminal user interface.
///
/// Interactive checklist built with ratatui.
pub mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskcat")]
#[command(
    author,
    version,
    about = "Categorize and prioritize your tasks with an LLM, then check off and copy what matters"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (searches upward for .taskcat.yml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Completion service API key (overrides the configured environment variable)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true, env = "TASKCAT_LOG_FILE")]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive checklist (default)
    Tui,

    /// Categorize and prioritize tasks once and print the result
    #[command(visible_alias = "c")]
    Categorize {
        /// Task text (use '-' to read from stdin)
        tasks: Option<String>,

        /// Read task text from file
        #[arg(short, long)]
        file: Option<String>,

        /// Output as JSON
        #[arg(long, conflicts_with = "raw")]
        json: bool,

        /// Print the model reply verbatim
        #[arg(long)]
        raw: bool,

        /// Print the prompt that would be sent without calling the service
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse a saved model reply and print the checklist
    Render {
        /// Reply file (reads stdin when omitted or '-')
        file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check tasks in a saved model reply and print the export text
    Export {
        /// Reply file (reads stdin when omitted or '-')
        file: Option<String>,

        /// Task to check, as "<category>::<label>" (repeatable)
        ///
        /// The key is split on the first "::" and both halves are trimmed, so
        /// a category containing "::" or a label with leading or trailing
        /// spaces cannot be matched; use --all for those replies.
        #[arg(long = "check", value_name = "CATEGORY::LABEL", allow_hyphen_values = true)]
        check: Vec<String>,

        /// Check every task
        #[arg(long, conflicts_with = "check")]
        all: bool,

        /// Also copy the export text to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Write a default .taskcat.yml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

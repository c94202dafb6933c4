mod categorize;
mod export;
mod init;
mod render;
mod tui;
mod utils;

pub use categorize::handle_categorize;
pub use export::handle_export;
pub use init::handle_init;
pub use render::handle_render;
pub use tui::handle_tui;

use crate::completion::{OpenAiClient, create_client};
use crate::config::TaskcatConfig;
use anyhow::{Context, Result};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: TaskcatConfig,
    pub api_key: Option<String>,
}

impl CommandContext {
    pub fn new(config: TaskcatConfig, api_key: Option<String>) -> Self {
        Self { config, api_key }
    }

    /// Build the completion client, failing fast when no credential is set
    pub fn client(&self) -> Result<OpenAiClient> {
        create_client(&self.config, self.api_key.as_deref())
            .context("Failed to set up the completion service")
    }
}

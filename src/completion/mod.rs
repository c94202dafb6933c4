//! Completion service access
//!
//! The rest of the crate only sees [`CompletionClient`]; the OpenAI
//! implementation is one backend behind it.

pub mod client;
mod error;
mod openai;

pub use client::CompletionClient;
pub use error::CompletionError;
pub use openai::OpenAiClient;

use crate::config::TaskcatConfig;
use crate::error::Result;

/// Build the configured completion client.
///
/// Resolves the credential first so a missing key fails before any request.
pub fn create_client(config: &TaskcatConfig, api_key: Option<&str>) -> Result<OpenAiClient> {
    let key = config.api_key(api_key)?;
    Ok(OpenAiClient::new(&config.completion, key)?)
}

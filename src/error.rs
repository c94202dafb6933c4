use crate::completion::CompletionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskcatError {
    #[error("Please enter some tasks.")]
    EmptyInput,

    #[error("Something went wrong: {0}")]
    Completion(#[from] CompletionError),

    #[error("No tasks selected to copy.")]
    NoSelection,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing API key: set {0} or pass --api-key")]
    MissingApiKey(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskcatError>;

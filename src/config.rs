use crate::error::{Result, TaskcatError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".taskcat.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskcatConfig {
    #[serde(default)]
    pub completion: CompletionSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Name of the environment variable holding the service credential
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    #[serde(default = "default_use_emojis")]
    pub use_emojis: bool,
}

fn default_use_emojis() -> bool {
    false
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            use_emojis: default_use_emojis(),
        }
    }
}

impl TaskcatConfig {
    /// Load configuration, searching upward from `start_path` for `.taskcat.yml`.
    ///
    /// Returns the defaults when no config file exists anywhere up the tree.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TaskcatError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: TaskcatConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let c = &self.completion;
        if c.model.trim().is_empty() {
            return Err(TaskcatError::Config(
                "completion.model must not be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&c.temperature) {
            return Err(TaskcatError::Config(format!(
                "completion.temperature must be between 0.0 and 1.0, got {}",
                c.temperature
            )));
        }
        if c.timeout_secs == 0 {
            return Err(TaskcatError::Config(
                "completion.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the completion-service credential.
    ///
    /// An explicit override wins, then the configured environment variable.
    pub fn api_key(&self, override_key: Option<&str>) -> Result<String> {
        if let Some(key) = override_key.map(str::trim).filter(|k| !k.is_empty()) {
            return Ok(key.to_string());
        }
        let var = &self.completion.api_key_env;
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(TaskcatError::MissingApiKey(var.clone())),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

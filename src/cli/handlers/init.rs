use crate::config::{CONFIG_FILE_NAME, TaskcatConfig};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let config = TaskcatConfig::default();
    config.save(&config_path)?;

    println!("{} taskcat config in {}", "Initialized".green(), cwd.display());
    println!("  Config:  {}", config_path.display());
    println!("  API key: read from ${}", config.completion.api_key_env);

    Ok(())
}

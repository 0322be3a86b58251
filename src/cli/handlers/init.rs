use crate::config::{CONFIG_FILE_NAME, FitlogConfig, LogSettings};
use crate::error::FitlogError;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(cwd: &Path, data_dir: Option<String>) -> Result<()> {
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(FitlogError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let mut settings = LogSettings::default();
    if let Some(dir) = data_dir {
        settings.data_dir = dir;
    }
    let config = FitlogConfig { log: settings };

    let data_path = config.data_path(cwd);
    std::fs::create_dir_all(&data_path)?;

    config.save(&config_path)?;

    println!(
        "{} fitlog project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Log:    {}", config.log_path(cwd).display());

    Ok(())
}

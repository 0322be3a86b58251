mod init;
mod path;
mod session;

pub use init::handle_init;
pub use path::handle_path;
pub use session::{handle_log, run_session};

use crate::config::FitlogConfig;
use crate::storage::WorkoutLog;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FitlogConfig,
    pub root: PathBuf,
    pub log: WorkoutLog,
}

impl CommandContext {
    pub fn new(config: FitlogConfig, root: PathBuf) -> Self {
        let log = WorkoutLog::from_config(&config, &root);
        Self { config, root, log }
    }

    /// Resolve configuration from an explicit file or by searching upward
    /// from `cwd`, then apply the data directory override.
    pub fn load(cwd: &Path, config_path: Option<&Path>, data_dir: Option<String>) -> Result<Self> {
        let (mut config, root) = match config_path {
            Some(path) => {
                let config = FitlogConfig::load_from(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?;
                let root = match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => cwd.to_path_buf(),
                };
                (config, root)
            }
            None => FitlogConfig::load(cwd).context("Failed to load fitlog configuration")?,
        };

        if let Some(dir) = data_dir {
            config.log.data_dir = dir;
        }

        Ok(Self::new(config, root))
    }
}

use crate::error::{FitlogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".fitlog.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitlogConfig {
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Directory holding the log, relative to the project root.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Reject non-positive sets/reps and negative weight while logging.
    #[serde(default)]
    pub strict: bool,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_file_name() -> String {
    "workout_log.csv".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: default_file_name(),
            strict: false,
        }
    }
}

impl FitlogConfig {
    /// Load the nearest `.fitlog.toml` at or above `start_path`.
    ///
    /// Returns the config and the directory it was found in. With no config
    /// file anywhere up the tree, defaults are rooted at `start_path`.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => {
                let config = Self::load_from(&config_path)?;
                let project_root = config_path
                    .parent()
                    .ok_or_else(|| {
                        FitlogError::Config("Config file has no parent directory".to_string())
                    })?
                    .to_path_buf();
                Ok((config, project_root))
            }
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config = toml::from_str(&content)?;
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

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.log.data_dir)
    }

    pub fn log_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join(&self.log.file_name)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = FitlogConfig::default();
        let root = Path::new("/tmp/project");
        assert_eq!(
            config.log_path(root),
            root.join("data").join("workout_log.csv")
        );
        assert!(!config.log.strict);
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let (config, root) = FitlogConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, FitlogConfig::default());
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_load_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[log]\ndata_dir = \"logs\"\nstrict = true\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, root) = FitlogConfig::load(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
        assert_eq!(config.log.data_dir, "logs");
        assert_eq!(config.log.file_name, "workout_log.csv");
        assert!(config.log.strict);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        let mut config = FitlogConfig::default();
        config.log.file_name = "lifts.csv".to_string();

        config.save(&path).unwrap();
        assert_eq!(FitlogConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[log\n").unwrap();
        assert!(matches!(
            FitlogConfig::load_from(&path),
            Err(FitlogError::TomlDe(_))
        ));
    }
}

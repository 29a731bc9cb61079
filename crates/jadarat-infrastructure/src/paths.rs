//! Path management for console configuration files.
//!
//! ```text
//! ~/.config/jadarat/        # Config directory (platform dependent)
//! ├── config.toml           # Backend connection, locale, logging
//! └── settings.toml         # Persisted settings draft (opt-in)
//! ```

use std::path::{Path, PathBuf};

use jadarat_core::{JadaratError, Result};

const APP_DIR: &str = "jadarat";
const CONFIG_FILE: &str = "config.toml";
const SETTINGS_FILE: &str = "settings.toml";

/// Resolves console file locations, optionally under an explicit base directory.
#[derive(Debug, Clone, Default)]
pub struct JadaratPaths {
    base: Option<PathBuf>,
}

impl JadaratPaths {
    /// `base` replaces the platform config directory (used by tests and `--config`).
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| JadaratError::config("Cannot find config directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    pub fn settings_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(SETTINGS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base() {
        let paths = JadaratPaths::new(Some(Path::new("/tmp/jadarat-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/jadarat-test/config.toml")
        );
        assert_eq!(
            paths.settings_file().unwrap(),
            PathBuf::from("/tmp/jadarat-test/settings.toml")
        );
    }

    #[test]
    fn test_default_dir_ends_with_app_name() {
        if let Ok(dir) = JadaratPaths::default().config_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}

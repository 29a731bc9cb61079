//! Loads `config.toml`, creating it with defaults on first run.
//!
//! Environment variables override the file:
//! `JADARAT_BACKEND_URL` and `JADARAT_BACKEND_ANON_KEY`.

use std::path::{Path, PathBuf};

use jadarat_core::Result;
use jadarat_core::config::AppConfig;

use crate::paths::JadaratPaths;
use crate::storage::AtomicTomlFile;

pub const ENV_BACKEND_URL: &str = "JADARAT_BACKEND_URL";
pub const ENV_BACKEND_ANON_KEY: &str = "JADARAT_BACKEND_ANON_KEY";

pub struct ConfigService {
    file: AtomicTomlFile<AppConfig>,
}

impl ConfigService {
    /// Uses `config_file` when given, otherwise `<config_dir>/jadarat/config.toml`.
    pub fn new(config_file: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match config_file {
            Some(path) => path.to_path_buf(),
            None => JadaratPaths::default().config_file()?,
        };
        Ok(Self {
            file: AtomicTomlFile::new(path),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reads the file (creating it if missing) and applies process env overrides.
    pub fn load(&self) -> Result<AppConfig> {
        let config = self.file.load_or_create(AppConfig::default())?;
        tracing::debug!("[Config] Loaded configuration from {}", self.path().display());
        Ok(apply_env_overrides(config, |name| std::env::var(name).ok()))
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        self.file.save(config)
    }
}

/// Applies backend overrides from `lookup`; blank values are ignored.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(url) = non_blank(ENV_BACKEND_URL) {
        tracing::debug!("[Config] Backend URL overridden by {}", ENV_BACKEND_URL);
        config.backend.url = url;
    }
    if let Some(key) = non_blank(ENV_BACKEND_ANON_KEY) {
        tracing::debug!("[Config] Backend key overridden by {}", ENV_BACKEND_ANON_KEY);
        config.backend.anon_key = key;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use jadarat_core::locale::Language;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::new(Some(&path)).unwrap();

        let file_only = service.file.load_or_create(AppConfig::default()).unwrap();
        assert_eq!(file_only, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_existing_file_is_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[locale]\ndefault_language = \"ar\"\n\n[settings]\nsave_delay_ms = 10\n",
        )
        .unwrap();

        let config = ConfigService::new(Some(&path)).unwrap().load().unwrap();
        assert_eq!(config.locale.default_language, Language::Ar);
        assert_eq!(config.settings.save_delay_ms, 10);
    }

    #[test]
    fn test_save_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(&temp_dir.path().join("config.toml"))).unwrap();

        let mut config = AppConfig::default();
        config.backend.url = "https://tenant.supabase.co".to_string();
        config.settings.persist = true;
        service.save(&config).unwrap();

        let loaded = service.file.load().unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_env_overrides_replace_backend_fields() {
        let env: HashMap<&str, &str> = [
            (ENV_BACKEND_URL, "https://env.supabase.co"),
            (ENV_BACKEND_ANON_KEY, "  "),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.backend.anon_key = "from-file".to_string();

        let config = apply_env_overrides(config, |name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.backend.url, "https://env.supabase.co");
        assert_eq!(config.backend.anon_key, "from-file");
    }
}

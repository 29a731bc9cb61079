use serde::{Deserialize, Serialize};

use crate::locale::Language;

/// Root of `config.toml`. Every field has a default so partial files load.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub locale: LocaleConfig,
    pub settings: SettingsConfig,
    pub logging: LoggingConfig,
}

/// Connection to the managed database-and-auth service.
#[derive(Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LocaleConfig {
    pub default_language: Language,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SettingsConfig {
    /// How long the simulated save waits before reporting success.
    pub save_delay_ms: u64,
    /// Write drafts to `settings.toml` instead of simulating the save.
    pub persist: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: 1000,
            persist: false,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

//! `SettingsStore` implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jadarat_core::Result;
use jadarat_core::settings::{SettingsDraft, SettingsStore};

use crate::paths::JadaratPaths;
use crate::storage::AtomicTomlFile;

/// Waits a fixed delay and reports success without writing anywhere.
///
/// This is the console's current save behavior; pick `TomlSettingsStore` to
/// actually keep the draft.
#[derive(Debug, Clone)]
pub struct SimulatedSettingsStore {
    delay: Duration,
}

impl SimulatedSettingsStore {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSettingsStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl SettingsStore for SimulatedSettingsStore {
    async fn save(&self, _draft: &SettingsDraft) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        tracing::info!("[Settings] Save simulated after {:?}; nothing was written", self.delay);
        Ok(())
    }
}

/// Persists the draft to `settings.toml`.
#[derive(Clone)]
pub struct TomlSettingsStore {
    file: Arc<AtomicTomlFile<SettingsDraft>>,
}

impl TomlSettingsStore {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        Ok(Self::with_path(JadaratPaths::new(base_path).settings_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }

    /// The last saved draft, if one was ever written.
    pub fn load(&self) -> Result<Option<SettingsDraft>> {
        self.file.load()
    }
}

#[async_trait]
impl SettingsStore for TomlSettingsStore {
    async fn save(&self, draft: &SettingsDraft) -> Result<()> {
        let file = self.file.clone();
        let draft = draft.clone();
        tokio::task::spawn_blocking(move || file.save(&draft))
            .await
            .map_err(|e| jadarat_core::JadaratError::internal(format!("Save task failed: {e}")))??;
        tracing::info!("[Settings] Saved draft to {}", self.file.path().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jadarat_core::settings::SettingValue;
    use jadarat_core::settings::model::{REQUIRE_2FA, SESSION_TIMEOUT};
    use tempfile::TempDir;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_store_waits_then_succeeds() {
        let store = SimulatedSettingsStore::default();
        let started = tokio::time::Instant::now();

        store.save(&SettingsDraft::default()).await.unwrap();

        assert!(started.elapsed() >= SimulatedSettingsStore::DEFAULT_DELAY);
    }

    #[tokio::test]
    async fn test_toml_store_persists_draft() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlSettingsStore::new(Some(temp_dir.path())).unwrap();
        assert!(store.load().unwrap().is_none());

        let mut draft = SettingsDraft::default();
        draft.toggle(REQUIRE_2FA).unwrap();
        draft.update(SESSION_TIMEOUT, SettingValue::Number(60)).unwrap();
        store.save(&draft).await.unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, draft);
        assert_eq!(loaded.get(REQUIRE_2FA), Some(&SettingValue::Flag(true)));
    }
}

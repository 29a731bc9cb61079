//! Settings persistence trait.

use async_trait::async_trait;

use super::model::SettingsDraft;
use crate::error::Result;

/// Where the settings editor sends a draft on save.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn save(&self, draft: &SettingsDraft) -> Result<()>;
}

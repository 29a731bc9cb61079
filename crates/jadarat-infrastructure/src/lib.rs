pub mod config_service;
pub mod dashboard_source;
pub mod dto;
pub mod paths;
pub mod settings_store;
pub mod storage;
pub mod supabase;

pub use crate::config_service::ConfigService;
pub use crate::dashboard_source::QueryDashboardSource;
pub use crate::paths::JadaratPaths;
pub use crate::settings_store::{SimulatedSettingsStore, TomlSettingsStore};
pub use crate::supabase::SupabaseClient;

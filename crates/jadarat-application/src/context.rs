//! Wires the ambient providers and hands out screens.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use jadarat_core::Result;
use jadarat_core::auth::AuthBackend;
use jadarat_core::config::AppConfig;
use jadarat_core::dashboard::DashboardSource;
use jadarat_core::navigation::Navigator;
use jadarat_core::query::QueryBackend;
use jadarat_core::settings::{SettingsDraft, SettingsStore};
use jadarat_infrastructure::{
    QueryDashboardSource, SimulatedSettingsStore, SupabaseClient, TomlSettingsStore,
};

use crate::dashboard::DashboardAggregator;
use crate::forms::{LoginScreen, SignupScreen};
use crate::locale_resolver::LocaleResolver;
use crate::navigation::MemoryNavigator;
use crate::route_guard::RouteGuard;
use crate::session_provider::SessionProvider;
use crate::settings_editor::SettingsEditor;

/// Everything a front-end needs, built once at startup.
///
/// Locale and session are shared by every screen; screens are created fresh
/// per visit so their local state never leaks between visits.
pub struct AppContext {
    pub locale: Arc<LocaleResolver>,
    pub session: Arc<SessionProvider>,
    pub navigator: Arc<dyn Navigator>,
    dashboard_source: Arc<dyn DashboardSource>,
    settings_store: Arc<dyn SettingsStore>,
    initial_settings: SettingsDraft,
}

impl AppContext {
    pub fn new(
        locale: Arc<LocaleResolver>,
        auth: Arc<dyn AuthBackend>,
        dashboard_source: Arc<dyn DashboardSource>,
        settings_store: Arc<dyn SettingsStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            locale,
            session: Arc::new(SessionProvider::new(auth)),
            navigator,
            dashboard_source,
            settings_store,
            initial_settings: SettingsDraft::default(),
        }
    }

    /// Builds the production wiring: one Supabase client serving both auth
    /// and reads, and the settings store chosen by `settings.persist`.
    ///
    /// `data_dir` overrides where `settings.toml` lives.
    pub fn from_config(config: &AppConfig, data_dir: Option<&Path>) -> Result<Self> {
        let client = Arc::new(SupabaseClient::from_config(&config.backend)?);
        tracing::info!("[Bootstrap] Backend: {}", client.base_url());

        let query: Arc<dyn QueryBackend> = client.clone();
        let dashboard_source = Arc::new(QueryDashboardSource::new(query));

        let (settings_store, initial_settings): (Arc<dyn SettingsStore>, SettingsDraft) =
            if config.settings.persist {
                let store = TomlSettingsStore::new(data_dir)?;
                let draft = store.load()?.unwrap_or_default();
                (Arc::new(store), draft)
            } else {
                let delay = Duration::from_millis(config.settings.save_delay_ms);
                (
                    Arc::new(SimulatedSettingsStore::new(delay)),
                    SettingsDraft::default(),
                )
            };

        let mut context = Self::new(
            Arc::new(LocaleResolver::new(config.locale.default_language)),
            client,
            dashboard_source,
            settings_store,
            Arc::new(MemoryNavigator::default()),
        );
        context.initial_settings = initial_settings;
        Ok(context)
    }

    pub fn login_screen(&self) -> LoginScreen {
        LoginScreen::new(
            self.session.clone(),
            self.navigator.clone(),
            self.locale.clone(),
        )
    }

    pub fn signup_screen(&self) -> SignupScreen {
        SignupScreen::new(self.session.clone(), self.locale.clone())
    }

    pub fn dashboard(&self) -> DashboardAggregator {
        DashboardAggregator::new(self.dashboard_source.clone(), self.locale.clone())
    }

    pub fn settings_editor(&self) -> SettingsEditor {
        SettingsEditor::with_draft(
            self.settings_store.clone(),
            self.locale.clone(),
            self.initial_settings.clone(),
        )
    }

    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(self.session.clone(), self.navigator.clone())
    }
}

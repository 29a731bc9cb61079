//! Screens and ambient providers of the Jadarat admin console.
//!
//! Every screen is a headless view-model: it owns its local state, exposes
//! mutators and async submit/load operations, and renders a translated
//! `*View` for whatever front-end draws it.

pub mod context;
pub mod dashboard;
pub mod forms;
pub mod locale_resolver;
pub mod navigation;
pub mod route_guard;
pub mod session_provider;
pub mod settings_editor;

pub use context::AppContext;
pub use dashboard::{DashboardAggregator, DashboardView};
pub use forms::{FormError, FormStatus, LoginScreen, SignupScreen};
pub use locale_resolver::LocaleResolver;
pub use navigation::MemoryNavigator;
pub use route_guard::{RouteDecision, RouteGuard};
pub use session_provider::SessionProvider;
pub use settings_editor::{SaveStatus, SettingsEditor, SettingsView};

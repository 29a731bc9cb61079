//! Active language and translation lookup shared by every screen.

use jadarat_core::locale::{Direction, Language, LocaleState, TranslationTable};
use tokio::sync::watch;

/// Holds the current `LocaleState` and translates keys against it.
///
/// The state lives in a watch channel so that a front-end can re-render when
/// the language changes. It is always replaced whole.
pub struct LocaleResolver {
    table: &'static TranslationTable,
    state: watch::Sender<LocaleState>,
}

impl LocaleResolver {
    pub fn new(language: Language) -> Self {
        let (state, _) = watch::channel(LocaleState::new(language));
        Self {
            table: TranslationTable::builtin(),
            state,
        }
    }

    /// Resolves `key` in the active language.
    ///
    /// An unknown key resolves to itself so the gap is visible on screen.
    pub fn translate(&self, key: &str) -> String {
        let language = self.language();
        match self.table.lookup(language, key) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!("[Locale] Missing translation for '{}' ({})", key, language);
                key.to_string()
            }
        }
    }

    pub fn language(&self) -> Language {
        self.state.borrow().language()
    }

    pub fn direction(&self) -> Direction {
        self.state.borrow().direction()
    }

    pub fn snapshot(&self) -> LocaleState {
        *self.state.borrow()
    }

    /// Switches language and notifies subscribers.
    pub fn set_language(&self, language: Language) {
        let previous = self.state.send_replace(LocaleState::new(language));
        if previous.language() != language {
            tracing::info!("[Locale] Language switched {} -> {}", previous.language(), language);
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LocaleState> {
        self.state.subscribe()
    }
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_follows_language() {
        let locale = LocaleResolver::new(Language::En);
        assert_eq!(locale.translate("login.signIn"), "Sign In");
        assert_eq!(locale.direction(), Direction::Ltr);

        locale.set_language(Language::Ar);
        assert_eq!(locale.translate("login.signIn"), "تسجيل الدخول");
        assert_eq!(locale.direction(), Direction::Rtl);
    }

    #[test]
    fn test_unknown_key_resolves_to_itself() {
        let locale = LocaleResolver::new(Language::Ar);
        assert_eq!(locale.translate("nope.missing"), "nope.missing");
    }

    #[test]
    fn test_snapshot_direction_matches_language() {
        let locale = LocaleResolver::default();
        assert_eq!(locale.snapshot().language(), Language::En);

        locale.set_language(Language::Ar);
        let snapshot = locale.snapshot();
        assert_eq!(snapshot.language(), Language::Ar);
        assert_eq!(snapshot.direction(), Direction::Rtl);
    }

    #[tokio::test]
    async fn test_subscribers_see_switch() {
        let locale = LocaleResolver::new(Language::En);
        let mut rx = locale.subscribe();

        locale.set_language(Language::Ar);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().language(), Language::Ar);
    }
}

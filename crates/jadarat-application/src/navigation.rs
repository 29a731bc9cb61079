//! In-process `Navigator` used by the terminal front-end and tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use jadarat_core::navigation::{DEFAULT_LANDING_PATH, Navigator};

#[derive(Debug)]
struct RouterState {
    current: String,
    origin: Option<String>,
    history: Vec<String>,
}

/// Keeps a history stack and the origin recorded by the last `navigate`.
#[derive(Debug)]
pub struct MemoryNavigator {
    state: Mutex<RouterState>,
}

impl MemoryNavigator {
    pub fn new(start: &str) -> Self {
        Self {
            state: Mutex::new(RouterState {
                current: start.to_string(),
                origin: None,
                history: vec![start.to_string()],
            }),
        }
    }

    /// Every path visited, oldest first. `replace` overwrites the last entry.
    pub fn history(&self) -> Vec<String> {
        self.lock().history.clone()
    }

    fn lock(&self) -> MutexGuard<'_, RouterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_LANDING_PATH)
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, path: &str, from: Option<&str>) {
        let mut state = self.lock();
        tracing::debug!("[Router] {} -> {} (from: {:?})", state.current, path, from);
        state.current = path.to_string();
        state.origin = from.map(str::to_string);
        state.history.push(path.to_string());
    }

    fn replace(&self, path: &str) {
        let mut state = self.lock();
        tracing::debug!("[Router] replace {} -> {}", state.current, path);
        state.current = path.to_string();
        state.origin = None;
        state.history.pop();
        state.history.push(path.to_string());
    }

    fn intended_destination(&self) -> Option<String> {
        self.lock().origin.clone()
    }

    fn current_path(&self) -> String {
        self.lock().current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jadarat_core::navigation::{LOGIN_PATH, SETTINGS_PATH};

    #[test]
    fn test_navigate_records_origin() {
        let navigator = MemoryNavigator::default();
        navigator.navigate(LOGIN_PATH, Some(SETTINGS_PATH));

        assert_eq!(navigator.current_path(), LOGIN_PATH);
        assert_eq!(navigator.intended_destination().as_deref(), Some(SETTINGS_PATH));
        assert_eq!(navigator.history(), vec!["/", LOGIN_PATH]);
    }

    #[test]
    fn test_replace_overwrites_entry_and_clears_origin() {
        let navigator = MemoryNavigator::new(SETTINGS_PATH);
        navigator.navigate(LOGIN_PATH, Some(SETTINGS_PATH));
        navigator.replace(SETTINGS_PATH);

        assert_eq!(navigator.current_path(), SETTINGS_PATH);
        assert!(navigator.intended_destination().is_none());
        assert_eq!(navigator.history(), vec![SETTINGS_PATH, SETTINGS_PATH]);
    }
}

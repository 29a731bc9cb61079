//! Keeps signed-out users on the public auth pages.

use std::sync::Arc;

use jadarat_core::navigation::{LOGIN_PATH, Navigator, SIGNUP_PATH};

use crate::session_provider::SessionProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// Sent to the login page; `from` is recorded so login can return there.
    RedirectToLogin { from: String },
}

pub fn is_public_path(path: &str) -> bool {
    matches!(path, LOGIN_PATH | SIGNUP_PATH)
}

pub struct RouteGuard {
    session: Arc<SessionProvider>,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionProvider>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// Decides whether `path` may be shown and redirects when it may not.
    pub fn enter(&self, path: &str) -> RouteDecision {
        if is_public_path(path) || self.session.is_authenticated() {
            return RouteDecision::Allow;
        }

        tracing::info!("[RouteGuard] {} requires a session; redirecting to login", path);
        self.navigator.navigate(LOGIN_PATH, Some(path));
        RouteDecision::RedirectToLogin {
            from: path.to_string(),
        }
    }
}

//! Ambient authentication state.
//!
//! `SessionProvider` wraps an `AuthBackend` and owns the one current
//! `Session`. Screens call into it; they never hold a session of their own.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jadarat_core::AuthError;
use jadarat_core::auth::{AuthBackend, PendingConfirmation, Session, SignUpRequest};
use tokio::sync::watch;

pub struct SessionProvider {
    backend: Arc<dyn AuthBackend>,
    session: watch::Sender<Option<Session>>,
}

impl SessionProvider {
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        let (session, _) = watch::channel(None);
        Self { backend, session }
    }

    /// Signs in and replaces the current session.
    ///
    /// On failure the current session is left as it was.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        tracing::info!("[SessionProvider] Signing in {}", email);
        match self.backend.sign_in(email, password).await {
            Ok(session) => {
                self.session.send_replace(Some(session.clone()));
                Ok(session)
            }
            Err(e) => {
                tracing::warn!("[SessionProvider] Sign-in failed for {}: {}", email, e);
                Err(e)
            }
        }
    }

    /// Creates an account. Never establishes a session.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<PendingConfirmation, AuthError> {
        tracing::info!("[SessionProvider] Signing up {}", request.email);
        let pending = self.backend.sign_up(request).await.inspect_err(|e| {
            tracing::warn!("[SessionProvider] Sign-up failed for {}: {}", request.email, e);
        })?;
        Ok(pending)
    }

    /// Clears the session. Revocation on the backend is best-effort.
    pub async fn sign_out(&self) {
        let Some(session) = self.session.send_replace(None) else {
            tracing::debug!("[SessionProvider] Sign-out with no active session");
            return;
        };

        match self.backend.sign_out(&session).await {
            Ok(()) => tracing::info!("[SessionProvider] Signed out {}", session.email),
            Err(e) => tracing::warn!(
                "[SessionProvider] Backend sign-out failed for {} (session cleared locally): {}",
                session.email,
                e
            ),
        }
    }

    /// The current session, or `None` when signed out or expired.
    pub fn current_session(&self) -> Option<Session> {
        self.current_session_at(Utc::now())
    }

    /// Like `current_session`, evaluated at `now`. An expired session is cleared.
    ///
    /// The expiry check and the clear happen under one lock, so a session
    /// stored concurrently by `sign_in` is never the one cleared. The backend
    /// stops sending an expired bearer on its own.
    pub fn current_session_at(&self, now: DateTime<Utc>) -> Option<Session> {
        let mut expired = None;
        self.session.send_if_modified(|slot| {
            if slot.as_ref().is_some_and(|session| session.is_expired_at(now)) {
                expired = slot.take();
                true
            } else {
                false
            }
        });

        if let Some(session) = expired {
            tracing::info!("[SessionProvider] Session for {} expired", session.email);
            return None;
        }
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// Receiver notified on every session replacement.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }
}

//! Authentication backend trait.

use async_trait::async_trait;

use super::model::{PendingConfirmation, Session, SignUpRequest};
use crate::error::AuthError;

/// The auth half of the managed backend.
///
/// Every call is terminal: implementations must not retry. Error messages are
/// passed through from the backend unchanged.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchanges email and password for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Creates an account that still needs email confirmation.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<PendingConfirmation, AuthError>;

    /// Revokes the given session on the backend.
    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
}

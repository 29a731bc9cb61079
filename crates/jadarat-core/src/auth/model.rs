//! Authentication domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated identity of the current console user.
///
/// Sessions are never mutated in place; the session provider replaces them
/// wholesale on sign-in and drops them on sign-out or expiry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

// Tokens stay out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Result of a successful sign-up: the account exists but must be confirmed.
///
/// This is deliberately not a `Session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingConfirmation {
    pub email: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Everything the backend needs to create an account.
#[derive(Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: DateTime<Utc>) -> Session {
        Session {
            user_id: Uuid::new_v4(),
            email: "admin@jadarat.io".to_string(),
            access_token: "secret-token".to_string(),
            refresh_token: Some("secret-refresh".to_string()),
            expires_at,
        }
    }

    #[test]
    fn test_expiry() {
        let now = Utc::now();
        assert!(!session(now + Duration::minutes(5)).is_expired_at(now));
        assert!(session(now).is_expired_at(now));
        assert!(session(now - Duration::seconds(1)).is_expired_at(now));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let rendered = format!("{:?}", session(Utc::now()));
        assert!(!rendered.contains("secret-token"));
        assert!(!rendered.contains("secret-refresh"));
        assert!(rendered.contains("admin@jadarat.io"));
    }

    #[test]
    fn test_sign_up_request_debug_redacts_password() {
        let request = SignUpRequest {
            email: "new@jadarat.io".to_string(),
            password: "hunter2hunter2".to_string(),
            first_name: "Sara".to_string(),
            last_name: "Ali".to_string(),
        };
        assert!(!format!("{request:?}").contains("hunter2"));
    }
}

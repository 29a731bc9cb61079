//! Wire shapes of the GoTrue auth endpoints.

use chrono::{DateTime, Duration, Utc};
use jadarat_core::AuthError;
use jadarat_core::auth::{PendingConfirmation, Session};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub(crate) struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignUpBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignUpMetadata<'a>,
}

/// Stored by GoTrue as `raw_user_meta_data`.
#[derive(Debug, Serialize)]
pub(crate) struct SignUpMetadata<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserDto {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: UserDto,
}

impl TokenResponse {
    /// Builds a session; `fallback_email` is used when the user object omits it.
    pub fn into_session(self, fallback_email: &str, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .unwrap_or_else(|| expires_after(now, self.expires_in));

        Session {
            user_id: self.user.id,
            email: self.user.email.unwrap_or_else(|| fallback_email.to_string()),
            access_token: self.access_token,
            refresh_token: self.refresh_token.filter(|token| !token.is_empty()),
            expires_at,
        }
    }
}

/// Out-of-range lifetimes fall back to the default one.
fn expires_after(now: DateTime<Utc>, expires_in: Option<i64>) -> DateTime<Utc> {
    expires_in
        .and_then(Duration::try_seconds)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .unwrap_or_else(|| now + Duration::seconds(DEFAULT_EXPIRES_IN_SECS))
}

/// Sign-up answers either with the bare user or, when autoconfirm is on,
/// with a token envelope carrying it under `user`.
#[derive(Debug, Deserialize)]
pub(crate) struct SignUpResponse {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user: Option<UserDto>,
}

impl SignUpResponse {
    pub fn into_pending(self, requested_email: &str) -> PendingConfirmation {
        let (user_id, email) = match self.user {
            Some(user) => (Some(user.id), user.email),
            None => (self.id, self.email),
        };
        PendingConfirmation {
            email: email.unwrap_or_else(|| requested_email.to_string()),
            user_id,
        }
    }
}

/// Error envelope shared by GoTrue and PostgREST. Each service fills a
/// different subset of these fields.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn first_message(self) -> Option<String> {
        [self.error_description, self.msg, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

/// Extracts the human-readable message from an error response body.
///
/// Falls back to the raw body, then to the status line.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Some(message) = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::first_message)
    {
        return message;
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

pub(crate) fn auth_error(status: reqwest::StatusCode, body: &str) -> AuthError {
    AuthError::new(error_message(status, body))
}

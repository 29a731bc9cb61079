//! Shared HTTP client for the Supabase REST and auth endpoints.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jadarat_core::config::BackendConfig;
use jadarat_core::{JadaratError, Result};
use reqwest::{Client, RequestBuilder};
use tokio::sync::RwLock;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Signed-in user's bearer and the instant it stops being valid.
#[derive(Clone)]
pub(crate) struct UserToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl UserToken {
    fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// One client per backend project; cheap to clone.
///
/// After a successful sign-in the user's access token replaces the anon key
/// as the bearer for table reads, so row-level security sees the user. Once
/// the token expires, requests go out with the anon key again.
#[derive(Clone)]
pub struct SupabaseClient {
    pub(crate) http: Client,
    base_url: String,
    anon_key: String,
    access_token: Arc<RwLock<Option<UserToken>>>,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(JadaratError::config("Backend URL is not configured"));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| JadaratError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            anon_key: anon_key.into(),
            access_token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(JadaratError::config(
                "Backend URL and anon key must both be set (config.toml or JADARAT_BACKEND_URL / JADARAT_BACKEND_ANON_KEY)",
            ));
        }
        Self::new(config.url.clone(), config.anon_key.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// Adds the project key and the bearer token to a request.
    pub(crate) async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .live_token_at(Utc::now())
            .await
            .unwrap_or_else(|| self.anon_key.clone());
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", bearer))
    }

    /// Adds only the project key; used for endpoints that must not carry a
    /// stale user token, such as sign-in.
    pub(crate) fn with_api_key(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.anon_key)
    }

    pub(crate) async fn set_access_token(&self, token: Option<UserToken>) {
        *self.access_token.write().await = token;
    }

    /// The user's bearer, unless missing or expired at `now`.
    async fn live_token_at(&self, now: DateTime<Utc>) -> Option<String> {
        self.access_token
            .read()
            .await
            .as_ref()
            .filter(|token| token.is_live_at(now))
            .map(|token| token.value.clone())
    }

    pub async fn has_user_token(&self) -> bool {
        self.live_token_at(Utc::now()).await.is_some()
    }
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(expires_at: DateTime<Utc>) -> UserToken {
        UserToken {
            value: "user-token".to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_urls_are_built_without_double_slashes() {
        let client = SupabaseClient::new("https://tenant.supabase.co/", "anon").unwrap();
        assert_eq!(client.base_url(), "https://tenant.supabase.co");
        assert_eq!(
            client.rest_url("organizations"),
            "https://tenant.supabase.co/rest/v1/organizations"
        );
        assert_eq!(client.auth_url("token"), "https://tenant.supabase.co/auth/v1/token");
    }

    #[test]
    fn test_unconfigured_backend_is_a_config_error() {
        let err = SupabaseClient::from_config(&BackendConfig::default()).unwrap_err();
        assert!(matches!(err, JadaratError::Config(_)));
        assert!(SupabaseClient::new("", "anon").is_err());
    }

    #[tokio::test]
    async fn test_access_token_replaces_and_clears() {
        let client = SupabaseClient::new("https://tenant.supabase.co", "anon").unwrap();
        assert!(!client.has_user_token().await);

        let in_an_hour = Utc::now() + chrono::Duration::hours(1);
        client.set_access_token(Some(token(in_an_hour))).await;
        assert!(client.has_user_token().await);

        client.set_access_token(None).await;
        assert!(!client.has_user_token().await);
    }

    #[tokio::test]
    async fn test_expired_user_token_falls_back_to_anon_key() {
        let client = SupabaseClient::new("https://tenant.supabase.co", "anon").unwrap();
        let expires_at = Utc::now() + chrono::Duration::minutes(5);
        client.set_access_token(Some(token(expires_at))).await;

        let just_before = expires_at - chrono::Duration::seconds(1);
        let live = client.live_token_at(just_before).await;
        assert_eq!(live.as_deref(), Some("user-token"));
        assert_eq!(client.live_token_at(expires_at).await, None);

        let a_second_ago = Utc::now() - chrono::Duration::seconds(1);
        client.set_access_token(Some(token(a_second_ago))).await;
        assert!(!client.has_user_token().await);

        let request = client.http.get(client.rest_url("organizations"));
        let request = client.authorize(request).await.build().unwrap();
        assert_eq!(request.headers()["Authorization"], "Bearer anon");
    }

    #[test]
    fn test_debug_hides_key() {
        let client = SupabaseClient::new("https://tenant.supabase.co", "anon-secret").unwrap();
        assert!(!format!("{client:?}").contains("anon-secret"));
    }
}

//! GoTrue password auth.

use async_trait::async_trait;
use chrono::Utc;
use jadarat_core::AuthError;
use jadarat_core::auth::{AuthBackend, PendingConfirmation, Session, SignUpRequest};

use super::client::{SupabaseClient, UserToken};
use super::dto::{
    PasswordGrantRequest, SignUpBody, SignUpMetadata, SignUpResponse, TokenResponse, auth_error,
};

fn transport_error(err: reqwest::Error) -> AuthError {
    AuthError::new(err.to_string())
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(auth_error(status, &body))
}

#[async_trait]
impl AuthBackend for SupabaseClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let request = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&PasswordGrantRequest { email, password });

        let response = self
            .with_api_key(request)
            .send()
            .await
            .map_err(transport_error)?;
        let token: TokenResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;

        let session = token.into_session(email, Utc::now());
        self.set_access_token(Some(UserToken {
            value: session.access_token.clone(),
            expires_at: session.expires_at,
        }))
        .await;
        tracing::info!("[Supabase] Signed in {}", session.email);
        Ok(session)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<PendingConfirmation, AuthError> {
        let body = SignUpBody {
            email: &request.email,
            password: &request.password,
            data: SignUpMetadata {
                first_name: &request.first_name,
                last_name: &request.last_name,
            },
        };
        let http_request = self.http.post(self.auth_url("signup")).json(&body);

        let response = self
            .with_api_key(http_request)
            .send()
            .await
            .map_err(transport_error)?;
        let created: SignUpResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;

        tracing::info!("[Supabase] Account created for {}", request.email);
        Ok(created.into_pending(&request.email))
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        // Local bearer is dropped even when revocation fails.
        self.set_access_token(None).await;

        let request = self
            .with_api_key(self.http.post(self.auth_url("logout")))
            .header("Authorization", format!("Bearer {}", session.access_token));

        let response = request.send().await.map_err(transport_error)?;
        ensure_success(response).await?;
        tracing::info!("[Supabase] Session revoked for {}", session.email);
        Ok(())
    }
}

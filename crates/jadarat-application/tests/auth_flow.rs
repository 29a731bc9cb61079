//! Login and signup flows against a counting auth backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jadarat_application::forms::{FormError, FormStatus, SignupView};
use jadarat_application::{LocaleResolver, LoginScreen, MemoryNavigator, SessionProvider, SignupScreen};
use jadarat_core::auth::{AuthBackend, PendingConfirmation, Session, SignUpRequest};
use jadarat_core::locale::Language;
use jadarat_core::navigation::{LOGIN_PATH, Navigator, SETTINGS_PATH};
use jadarat_core::{AuthError, ValidationError};
use uuid::Uuid;

#[derive(Default)]
struct CountingBackend {
    sign_in_calls: Mutex<usize>,
    sign_up_calls: Mutex<Vec<SignUpRequest>>,
    reject_with: Option<String>,
}

impl CountingBackend {
    fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn sign_in_calls(&self) -> usize {
        *self.sign_in_calls.lock().unwrap()
    }

    fn sign_up_calls(&self) -> usize {
        self.sign_up_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AuthBackend for CountingBackend {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session, AuthError> {
        *self.sign_in_calls.lock().unwrap() += 1;
        tokio::task::yield_now().await;
        if let Some(message) = &self.reject_with {
            return Err(AuthError::new(message.clone()));
        }
        Ok(Session {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            access_token: "access".to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_at: Utc::now() + Duration::hours(1),
        })
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<PendingConfirmation, AuthError> {
        self.sign_up_calls.lock().unwrap().push(request.clone());
        if let Some(message) = &self.reject_with {
            return Err(AuthError::new(message.clone()));
        }
        Ok(PendingConfirmation {
            email: request.email.clone(),
            user_id: Some(Uuid::new_v4()),
        })
    }

    async fn sign_out(&self, _session: &Session) -> Result<(), AuthError> {
        Ok(())
    }
}

struct Harness {
    backend: Arc<CountingBackend>,
    session: Arc<SessionProvider>,
    navigator: Arc<MemoryNavigator>,
    locale: Arc<LocaleResolver>,
}

impl Harness {
    fn new(backend: CountingBackend, language: Language) -> Self {
        let backend = Arc::new(backend);
        Self {
            session: Arc::new(SessionProvider::new(backend.clone())),
            backend,
            navigator: Arc::new(MemoryNavigator::new(LOGIN_PATH)),
            locale: Arc::new(LocaleResolver::new(language)),
        }
    }

    fn login(&self) -> LoginScreen {
        LoginScreen::new(
            self.session.clone(),
            self.navigator.clone(),
            self.locale.clone(),
        )
    }

    fn signup(&self) -> SignupScreen {
        SignupScreen::new(self.session.clone(), self.locale.clone())
    }
}

fn fill_signup(screen: &mut SignupScreen, password: &str, confirm: &str) {
    screen.set_first_name("Sara");
    screen.set_last_name("Ali");
    screen.set_email("sara@jadarat.io");
    screen.set_password(password);
    screen.set_confirm_password(confirm);
}

#[tokio::test]
async fn login_success_without_origin_goes_home() {
    let harness = Harness::new(CountingBackend::default(), Language::En);
    let mut screen = harness.login();
    screen.set_email("admin@jadarat.io");
    screen.set_password("correct-horse");

    screen.submit().await.unwrap();

    assert_eq!(screen.status(), FormStatus::Success);
    assert_eq!(harness.navigator.current_path(), "/");
    assert!(harness.session.current_session().is_some());
}

#[tokio::test]
async fn login_success_returns_to_recorded_origin() {
    let harness = Harness::new(CountingBackend::default(), Language::En);
    harness.navigator.navigate(LOGIN_PATH, Some(SETTINGS_PATH));
    let mut screen = harness.login();
    screen.set_email("admin@jadarat.io");
    screen.set_password("correct-horse");

    screen.submit().await.unwrap();

    assert_eq!(harness.navigator.current_path(), SETTINGS_PATH);
}

#[tokio::test]
async fn login_failure_shows_backend_message_and_stays() {
    let harness = Harness::new(
        CountingBackend::rejecting("Invalid login credentials"),
        Language::Ar,
    );
    let mut screen = harness.login();
    screen.set_email("admin@jadarat.io");
    screen.set_password("wrong");

    let err = screen.submit().await.unwrap_err();

    assert_eq!(err, FormError::Auth(AuthError::new("Invalid login credentials")));
    assert_eq!(screen.status(), FormStatus::Failed);
    assert_eq!(harness.navigator.current_path(), LOGIN_PATH);
    assert_eq!(harness.navigator.history(), vec![LOGIN_PATH]);
    // Not translated even though the UI is in Arabic.
    assert_eq!(
        screen.view().error.as_deref(),
        Some("Invalid login credentials")
    );
    assert!(!screen.view().submit_disabled);

    // Resubmitting goes back through the backend.
    let _ = screen.submit().await;
    assert_eq!(harness.backend.sign_in_calls(), 2);
}

#[tokio::test]
async fn login_reports_submitting_while_in_flight() {
    let harness = Harness::new(CountingBackend::default(), Language::En);
    let mut screen = harness.login();
    screen.set_email("admin@jadarat.io");
    screen.set_password("correct-horse");
    let mut status = screen.subscribe_status();

    let observe = async {
        status.changed().await.unwrap();
        status.borrow_and_update().clone()
    };
    let (result, seen) = tokio::join!(screen.submit(), observe);

    result.unwrap();
    assert_eq!(seen, FormStatus::Submitting);
}

#[tokio::test]
async fn signup_short_password_never_reaches_backend() {
    let harness = Harness::new(CountingBackend::default(), Language::En);
    let mut screen = harness.signup();
    fill_signup(&mut screen, "short", "short");

    let err = screen.submit().await.unwrap_err();

    assert_eq!(
        err,
        FormError::Validation(ValidationError::PasswordTooShort { min: 8 })
    );
    assert_eq!(screen.status(), FormStatus::Editing);
    assert_eq!(harness.backend.sign_up_calls(), 0);
    let SignupView::Form(view) = screen.view() else {
        panic!("still on the form");
    };
    assert_eq!(
        view.error.as_deref(),
        Some("Password must be at least 8 characters")
    );
}

#[tokio::test]
async fn signup_mismatch_never_reaches_backend() {
    let harness = Harness::new(CountingBackend::default(), Language::En);
    let mut screen = harness.signup();
    fill_signup(&mut screen, "long-enough", "long-enough!");

    let err = screen.submit().await.unwrap_err();

    assert_eq!(err, FormError::Validation(ValidationError::PasswordMismatch));
    assert_eq!(harness.backend.sign_up_calls(), 0);
}

#[tokio::test]
async fn signup_success_shows_confirmation_without_session() {
    let harness = Harness::new(CountingBackend::default(), Language::En);
    let mut screen = harness.signup();
    fill_signup(&mut screen, "long-enough", "long-enough");

    let pending = screen.submit().await.unwrap();

    assert_eq!(pending.email, "sara@jadarat.io");
    assert!(harness.session.current_session().is_none());
    let sent = harness.backend.sign_up_calls.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].first_name, "Sara");
    assert_eq!(sent[0].last_name, "Ali");
    assert!(matches!(screen.view(), SignupView::Confirmation(_)));
}

#[tokio::test]
async fn signup_backend_error_is_verbatim_and_editable() {
    let harness = Harness::new(
        CountingBackend::rejecting("User already registered"),
        Language::En,
    );
    let mut screen = harness.signup();
    fill_signup(&mut screen, "long-enough", "long-enough");

    let err = screen.submit().await.unwrap_err();

    assert_eq!(err, FormError::Auth(AuthError::new("User already registered")));
    assert_eq!(screen.status(), FormStatus::Failed);
    let SignupView::Form(view) = screen.view() else {
        panic!("still on the form");
    };
    assert_eq!(view.error.as_deref(), Some("User already registered"));
    assert!(!view.first_name.disabled);
}

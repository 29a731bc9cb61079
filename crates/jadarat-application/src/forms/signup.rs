use std::sync::Arc;

use jadarat_core::ValidationError;
use jadarat_core::auth::{PendingConfirmation, SignUpRequest};
use jadarat_core::error::MIN_PASSWORD_LENGTH;
use jadarat_core::navigation::LOGIN_PATH;
use tokio::sync::watch;

use super::{FieldView, FormError, FormHeader, FormStatus, LinkView};
use crate::locale_resolver::LocaleResolver;
use crate::session_provider::SessionProvider;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupDraft {
    fn to_request(&self) -> SignUpRequest {
        SignUpRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Checks the password rules in order: length first, then confirmation.
///
/// Length counts characters, not bytes.
pub fn validate_signup(draft: &SignupDraft) -> Result<(), ValidationError> {
    if draft.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if draft.password != draft.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub struct SignupScreen {
    session: Arc<SessionProvider>,
    locale: Arc<LocaleResolver>,
    draft: SignupDraft,
    status: watch::Sender<FormStatus>,
    error: Option<FormError>,
    confirmation: Option<PendingConfirmation>,
}

impl SignupScreen {
    pub fn new(session: Arc<SessionProvider>, locale: Arc<LocaleResolver>) -> Self {
        let (status, _) = watch::channel(FormStatus::Editing);
        Self {
            session,
            locale,
            draft: SignupDraft::default(),
            status,
            error: None,
            confirmation: None,
        }
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.draft.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.draft.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.draft.password = value.into();
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.draft.confirm_password = value.into();
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    pub fn status(&self) -> FormStatus {
        self.status.borrow().clone()
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn confirmation(&self) -> Option<&PendingConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<FormStatus> {
        self.status.subscribe()
    }

    /// Validates locally, then creates the account.
    ///
    /// A validation failure leaves the screen in `Editing` and the backend is
    /// not called. Success is terminal: the screen switches to the
    /// "check your email" confirmation.
    pub async fn submit(&mut self) -> Result<PendingConfirmation, FormError> {
        self.error = None;

        if let Err(e) = validate_signup(&self.draft) {
            tracing::debug!("[Signup] Rejected locally: {}", e);
            let error = FormError::Validation(e);
            self.error = Some(error.clone());
            self.status.send_replace(FormStatus::Editing);
            return Err(error);
        }

        self.status.send_replace(FormStatus::Submitting);
        match self.session.sign_up(&self.draft.to_request()).await {
            Ok(pending) => {
                tracing::info!("[Signup] Confirmation pending for {}", pending.email);
                self.confirmation = Some(pending.clone());
                self.status.send_replace(FormStatus::Success);
                Ok(pending)
            }
            Err(e) => {
                let error = FormError::Auth(e);
                self.error = Some(error.clone());
                self.status.send_replace(FormStatus::Failed);
                Err(error)
            }
        }
    }

    pub fn view(&self) -> SignupView {
        SignupView::build(&self.draft, &self.status(), self.error.as_ref(), &self.locale)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupFormView {
    pub header: FormHeader,
    pub error: Option<String>,
    pub first_name: FieldView,
    pub last_name: FieldView,
    pub email: FieldView,
    pub password: FieldView,
    pub confirm_password: FieldView,
    pub submit_label: String,
    pub submit_disabled: bool,
    pub footer: LinkView,
}

/// Shown after a successful sign-up; the only way out is the login link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub header: FormHeader,
    pub login_link: LinkView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupView {
    Form(SignupFormView),
    Confirmation(ConfirmationView),
}

impl SignupView {
    pub fn build(
        draft: &SignupDraft,
        status: &FormStatus,
        error: Option<&FormError>,
        locale: &LocaleResolver,
    ) -> Self {
        if *status == FormStatus::Success {
            return Self::Confirmation(ConfirmationView {
                header: FormHeader::new(locale, "signup.successTitle", "signup.successMessage"),
                login_link: LinkView {
                    prompt: None,
                    label: locale.translate("signup.signIn"),
                    path: LOGIN_PATH,
                },
            });
        }

        let busy = status.is_submitting();
        let field = |name: &'static str, key: &str, value: &str| {
            FieldView::new(name, locale.translate(key), value, busy)
        };

        Self::Form(SignupFormView {
            header: FormHeader::new(locale, "signup.title", "signup.description"),
            error: error.map(|e| e.message(locale)),
            first_name: field("firstName", "signup.firstName", &draft.first_name),
            last_name: field("lastName", "signup.lastName", &draft.last_name),
            email: field("email", "signup.email", &draft.email)
                .with_placeholder(locale.translate("login.emailPlaceholder")),
            password: field("password", "signup.password", &draft.password).secret(),
            confirm_password: field(
                "confirmPassword",
                "signup.confirmPassword",
                &draft.confirm_password,
            )
            .secret(),
            submit_label: locale.translate(if busy {
                "signup.signingUp"
            } else {
                "signup.signUp"
            }),
            submit_disabled: busy,
            footer: LinkView {
                prompt: Some(locale.translate("signup.haveAccount")),
                label: locale.translate("signup.signIn"),
                path: LOGIN_PATH,
            },
        })
    }
}

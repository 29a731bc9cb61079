use std::sync::Arc;

use jadarat_core::navigation::{DEFAULT_LANDING_PATH, Navigator, SIGNUP_PATH};
use tokio::sync::watch;

use super::{FieldView, FormError, FormHeader, FormStatus, LinkView};
use crate::locale_resolver::LocaleResolver;
use crate::session_provider::SessionProvider;

/// Field values typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

pub struct LoginScreen {
    session: Arc<SessionProvider>,
    navigator: Arc<dyn Navigator>,
    locale: Arc<LocaleResolver>,
    draft: LoginDraft,
    status: watch::Sender<FormStatus>,
    error: Option<FormError>,
}

impl LoginScreen {
    pub fn new(
        session: Arc<SessionProvider>,
        navigator: Arc<dyn Navigator>,
        locale: Arc<LocaleResolver>,
    ) -> Self {
        let (status, _) = watch::channel(FormStatus::Editing);
        Self {
            session,
            navigator,
            locale,
            draft: LoginDraft::default(),
            status,
            error: None,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.draft.password = password.into();
    }

    pub fn draft(&self) -> &LoginDraft {
        &self.draft
    }

    pub fn status(&self) -> FormStatus {
        self.status.borrow().clone()
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Lets a front-end redraw while a submit is in flight.
    pub fn subscribe_status(&self) -> watch::Receiver<FormStatus> {
        self.status.subscribe()
    }

    /// Signs in with the current draft.
    ///
    /// On success the navigator replaces the login page with the recorded
    /// origin, or `/`. On failure the backend message is kept verbatim and
    /// nothing navigates.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        self.error = None;
        self.status.send_replace(FormStatus::Submitting);

        match self
            .session
            .sign_in(&self.draft.email, &self.draft.password)
            .await
        {
            Ok(_) => {
                self.status.send_replace(FormStatus::Success);
                let target = self
                    .navigator
                    .intended_destination()
                    .unwrap_or_else(|| DEFAULT_LANDING_PATH.to_string());
                tracing::info!("[Login] Signed in; continuing to {}", target);
                self.navigator.replace(&target);
                Ok(())
            }
            Err(e) => {
                let error = FormError::Auth(e);
                self.error = Some(error.clone());
                self.status.send_replace(FormStatus::Failed);
                Err(error)
            }
        }
    }

    pub fn view(&self) -> LoginView {
        LoginView::build(&self.draft, &self.status(), self.error.as_ref(), &self.locale)
    }
}

/// Everything the login card shows, already translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub header: FormHeader,
    pub error: Option<String>,
    pub email: FieldView,
    pub password: FieldView,
    pub submit_label: String,
    pub submit_disabled: bool,
    pub footer: LinkView,
}

impl LoginView {
    pub fn build(
        draft: &LoginDraft,
        status: &FormStatus,
        error: Option<&FormError>,
        locale: &LocaleResolver,
    ) -> Self {
        let busy = status.is_submitting();
        let submit_key = if busy { "login.signingIn" } else { "login.signIn" };

        Self {
            header: FormHeader::new(locale, "login.title", "login.description"),
            error: error.map(|e| e.message(locale)),
            email: FieldView::new("email", locale.translate("login.email"), &draft.email, busy)
                .with_placeholder(locale.translate("login.emailPlaceholder")),
            password: FieldView::new(
                "password",
                locale.translate("login.password"),
                &draft.password,
                busy,
            )
            .secret(),
            submit_label: locale.translate(submit_key),
            submit_disabled: busy,
            footer: LinkView {
                prompt: Some(locale.translate("login.noAccount")),
                label: locale.translate("login.signUp"),
                path: SIGNUP_PATH,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jadarat_core::locale::{Direction, Language};
    use jadarat_core::{AuthError, ValidationError};

    #[test]
    fn test_view_while_submitting_disables_inputs() {
        let locale = LocaleResolver::new(Language::En);
        let draft = LoginDraft {
            email: "admin@jadarat.io".to_string(),
            password: "secret".to_string(),
        };

        let view = LoginView::build(&draft, &FormStatus::Submitting, None, &locale);

        assert_eq!(view.submit_label, "Signing in...");
        assert!(view.submit_disabled);
        assert!(view.email.disabled);
        assert!(view.password.disabled);
        assert!(view.password.secret);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_view_in_arabic_is_rtl_and_shows_backend_message_verbatim() {
        let locale = LocaleResolver::new(Language::Ar);
        let error = FormError::Auth(AuthError::new("Invalid login credentials"));

        let view = LoginView::build(&LoginDraft::default(), &FormStatus::Failed, Some(&error), &locale);

        assert_eq!(view.header.direction, Direction::Rtl);
        assert_eq!(view.header.title, "مرحباً بعودتك");
        assert_eq!(view.error.as_deref(), Some("Invalid login credentials"));
        assert_eq!(view.submit_label, "تسجيل الدخول");
        assert!(!view.submit_disabled);
        assert_eq!(view.footer.path, SIGNUP_PATH);
    }

    #[test]
    fn test_validation_errors_are_translated() {
        let locale = LocaleResolver::new(Language::En);
        let error = FormError::Validation(ValidationError::PasswordMismatch);
        assert_eq!(error.message(&locale), "Passwords do not match");
    }
}

//! Login and signup screens.
//!
//! # Module Structure
//!
//! - `login`: `LoginScreen` and its `LoginView`
//! - `signup`: `SignupScreen`, local validation and the confirmation view
//!
//! Both screens run the same lifecycle:
//! `Editing -> Submitting -> Success | Failed`. A failed local validation
//! returns to `Editing` with an inline error and never contacts the backend.

mod login;
mod signup;

pub use login::{LoginDraft, LoginScreen, LoginView};
pub use signup::{
    ConfirmationView, SignupDraft, SignupFormView, SignupScreen, SignupView, validate_signup,
};

use jadarat_core::locale::Direction;
use jadarat_core::{AuthError, ValidationError};

use crate::locale_resolver::LocaleResolver;

/// Why the last submit did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Caught locally; shown translated.
    Validation(ValidationError),
    /// Returned by the backend; shown verbatim.
    Auth(AuthError),
}

impl FormError {
    pub fn message(&self, locale: &LocaleResolver) -> String {
        match self {
            Self::Validation(e) => locale.translate(e.translation_key()),
            Self::Auth(e) => e.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Success,
    Failed,
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// A labelled input as the front-end should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: String,
    pub value: String,
    pub placeholder: Option<String>,
    /// Masked input; the value is still carried so the field can be redrawn.
    pub secret: bool,
    pub disabled: bool,
}

impl FieldView {
    fn new(name: &'static str, label: String, value: &str, disabled: bool) -> Self {
        Self {
            name,
            label,
            value: value.to_string(),
            placeholder: None,
            secret: false,
            disabled,
        }
    }

    fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    fn with_placeholder(mut self, placeholder: String) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// A link to another route, e.g. "Sign up" under the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub prompt: Option<String>,
    pub label: String,
    pub path: &'static str,
}

/// Shared header of both auth cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormHeader {
    pub app_name: String,
    pub title: String,
    pub description: String,
    pub direction: Direction,
}

impl FormHeader {
    fn new(locale: &LocaleResolver, title_key: &str, description_key: &str) -> Self {
        Self {
            app_name: locale.translate("app.name"),
            title: locale.translate(title_key),
            description: locale.translate(description_key),
            direction: locale.direction(),
        }
    }
}

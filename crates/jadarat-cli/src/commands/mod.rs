pub mod dashboard;
pub mod login;
pub mod settings;
pub mod signup;

use anyhow::Result;
use clap::Args;
use jadarat_application::{AppContext, RouteDecision};

pub use settings::SettingsAction;

/// Optional sign-in performed before opening a protected page.
#[derive(Args, Debug, Default)]
pub struct Credentials {
    #[arg(long, requires = "password")]
    pub email: Option<String>,
    #[arg(long, requires = "email")]
    pub password: Option<String>,
}

/// Signs in when credentials were given, then runs the route guard for `path`.
///
/// Returns `false` when the page stays locked.
pub async fn open_protected(
    context: &AppContext,
    credentials: &Credentials,
    path: &str,
) -> Result<bool> {
    if let (Some(email), Some(password)) = (&credentials.email, &credentials.password) {
        let mut screen = context.login_screen();
        screen.set_email(email.as_str());
        screen.set_password(password.as_str());
        if screen.submit().await.is_err() {
            tracing::warn!("[Cli] Sign-in failed before opening {}", path);
            crate::render::login(&screen.view());
            return Ok(false);
        }
    }

    match context.route_guard().enter(path) {
        RouteDecision::Allow => Ok(true),
        RouteDecision::RedirectToLogin { from } => {
            tracing::info!("[Cli] {} requires a session", from);
            crate::render::locked(&context.locale, &from);
            Ok(false)
        }
    }
}

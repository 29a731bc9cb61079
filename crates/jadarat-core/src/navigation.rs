//! Navigation contract consumed by the screens.

/// Landing page after a successful login with no recorded origin.
pub const DEFAULT_LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const SETTINGS_PATH: &str = "/settings";
pub const ORGANIZATIONS_PATH: &str = "/organizations";

/// Router capability handed to screens.
///
/// `navigate` may record the path the user came from so that the login screen
/// can send them back there; `intended_destination` reads that record.
pub trait Navigator: Send + Sync {
    /// Moves to `path`. When `from` is set it is remembered as the intended
    /// destination for the next successful login.
    fn navigate(&self, path: &str, from: Option<&str>);

    /// Replaces the current history entry with `path`.
    fn replace(&self, path: &str);

    /// The origin recorded by the last `navigate` call, if any.
    fn intended_destination(&self) -> Option<String>;

    /// The path currently displayed.
    fn current_path(&self) -> String;
}

use anyhow::Result;
use jadarat_application::AppContext;

pub async fn run(context: &AppContext, email: String, password: String) -> Result<bool> {
    let mut screen = context.login_screen();
    screen.set_email(email);
    screen.set_password(password);

    let outcome = screen.submit().await;
    crate::render::login(&screen.view());

    match outcome {
        Ok(()) => {
            crate::render::signed_in(&context.locale, &context.navigator.current_path());
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

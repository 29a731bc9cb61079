use anyhow::Result;
use jadarat_application::AppContext;

pub struct SignupArgs {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub async fn run(context: &AppContext, args: SignupArgs) -> Result<bool> {
    let mut screen = context.signup_screen();
    screen.set_first_name(args.first_name);
    screen.set_last_name(args.last_name);
    screen.set_email(args.email);
    screen.set_password(args.password);
    screen.set_confirm_password(args.confirm_password);

    let outcome = screen.submit().await;
    crate::render::signup(&screen.view());
    Ok(outcome.is_ok())
}

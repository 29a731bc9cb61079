use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jadarat_application::AppContext;
use jadarat_core::config::AppConfig;
use jadarat_core::locale::Language;
use jadarat_infrastructure::ConfigService;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

use commands::{Credentials, SettingsAction};

#[derive(Parser)]
#[command(name = "jadarat")]
#[command(about = "Jadarat ATS admin console", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display language: en or ar
    #[arg(long, global = true, value_parser = parse_language)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account that still needs email confirmation
    Signup {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to --password
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Show platform statistics and recent organizations
    Dashboard {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Show or edit platform settings
    Settings {
        #[command(flatten)]
        credentials: Credentials,
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Signup { .. } => "signup",
            Self::Dashboard { .. } => "dashboard",
            Self::Settings { .. } => "settings",
        }
    }
}

fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse::<Language>()
        .map_err(|_| format!("unsupported language '{raw}' (expected en or ar)"))
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<bool> {
    let config_service =
        ConfigService::new(cli.config.as_deref()).context("Failed to resolve config location")?;
    let config = config_service
        .load()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
    init_tracing(&config);
    tracing::info!("[Cli] Loaded config from {}", config_service.path().display());

    let data_dir = config_service.path().parent().map(PathBuf::from);
    let context = AppContext::from_config(&config, data_dir.as_deref())
        .context("Failed to connect the console to its backend")?;
    if let Some(language) = cli.lang {
        context.locale.set_language(language);
    }

    let command = cli.command.name();
    tracing::debug!("[Cli] Running '{}'", command);
    let succeeded = match cli.command {
        Commands::Login { email, password } => commands::login::run(&context, email, password).await,
        Commands::Signup {
            first_name,
            last_name,
            email,
            password,
            confirm_password,
        } => {
            let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
            commands::signup::run(
                &context,
                commands::signup::SignupArgs {
                    first_name,
                    last_name,
                    email,
                    password,
                    confirm_password,
                },
            )
            .await
        }
        Commands::Dashboard { credentials } => {
            commands::dashboard::run(&context, &credentials).await
        }
        Commands::Settings {
            credentials,
            action,
        } => commands::settings::run(&context, &credentials, action).await,
    }?;

    if succeeded {
        tracing::info!("[Cli] '{}' completed", command);
    } else {
        tracing::warn!("[Cli] '{}' did not complete", command);
    }
    Ok(succeeded)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_for_logging() {
        let cli = Cli::try_parse_from([
            "jadarat",
            "--lang",
            "ar",
            "dashboard",
            "--email",
            "admin@jadarat.io",
            "--password",
            "secret",
        ])
        .unwrap();
        assert_eq!(cli.lang, Some(Language::Ar));
        assert_eq!(cli.command.name(), "dashboard");

        let cli = Cli::try_parse_from(["jadarat", "settings", "toggle", "require2FA"]).unwrap();
        assert_eq!(cli.command.name(), "settings");
    }

    #[test]
    fn test_rejects_unsupported_language() {
        assert!(Cli::try_parse_from(["jadarat", "--lang", "fr", "dashboard"]).is_err());
    }
}

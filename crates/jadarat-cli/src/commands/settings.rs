use anyhow::{Context, Result};
use clap::Subcommand;
use jadarat_application::{AppContext, SaveStatus};
use jadarat_core::navigation::SETTINGS_PATH;

use super::{Credentials, open_protected};

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print every section (default)
    Show,
    /// Set one field from text input and save
    Set { key: String, value: String },
    /// Flip an on/off field and save
    Toggle { key: String },
}

pub async fn run(
    context: &AppContext,
    credentials: &Credentials,
    action: Option<SettingsAction>,
) -> Result<bool> {
    if !open_protected(context, credentials, SETTINGS_PATH).await? {
        return Ok(false);
    }

    let mut editor = context.settings_editor();
    match action.unwrap_or(SettingsAction::Show) {
        SettingsAction::Show => {
            crate::render::settings(&editor.view());
            return Ok(true);
        }
        SettingsAction::Set { key, value } => editor
            .update_from_input(&key, &value)
            .with_context(|| format!("Cannot set '{key}'"))?,
        SettingsAction::Toggle { key } => {
            editor
                .toggle(&key)
                .with_context(|| format!("Cannot toggle '{key}'"))?;
        }
    }

    // A failed save is reported through the view's notice.
    let _ = editor.save().await;
    crate::render::settings(&editor.view());
    Ok(editor.status() == SaveStatus::Saved)
}

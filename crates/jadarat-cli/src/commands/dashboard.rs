use anyhow::Result;
use jadarat_application::AppContext;
use jadarat_core::navigation::DEFAULT_LANDING_PATH;

use super::{Credentials, open_protected};

pub async fn run(context: &AppContext, credentials: &Credentials) -> Result<bool> {
    if !open_protected(context, credentials, DEFAULT_LANDING_PATH).await? {
        return Ok(false);
    }

    let view = context.dashboard().load_view().await;
    crate::render::dashboard(&view);
    Ok(true)
}

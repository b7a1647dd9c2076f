//! Reset command implementation

use anyhow::{Context, Result};
use shopctl_compose::{DatabaseCredentials, RESET_ABORTED_EXIT};
use shopctl_core::ModeProfile;

use crate::App;

pub async fn execute(app: &App, profile: &ModeProfile) -> Result<i32> {
    let credentials = DatabaseCredentials::from_env();

    let code = app
        .reset(profile, &credentials)
        .await
        .context("Failed to reset database")?;

    match code {
        0 => println!("✅ Database '{}' dropped", credentials.database),
        RESET_ABORTED_EXIT => println!("Aborted, nothing was dropped"),
        _ => {}
    }

    Ok(code)
}

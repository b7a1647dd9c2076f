//! Backup command implementation

use anyhow::{Context, Result};
use chrono::Local;
use shopctl_compose::DatabaseCredentials;
use shopctl_core::ModeProfile;

use crate::App;

pub async fn execute(app: &App, profile: &ModeProfile) -> Result<i32> {
    let credentials = DatabaseCredentials::from_env();
    tracing::debug!(?credentials, "Loaded database credentials");

    let outcome = app
        .backup(profile, &credentials, Local::now().naive_local())
        .await
        .context("Failed to create backup")?;

    if outcome.exit_code == 0 {
        println!("✅ Backup written to {}", outcome.archive.display());
    } else {
        eprintln!(
            "❌ Backup failed (exit code {}), partial archive at {}",
            outcome.exit_code,
            outcome.archive.display()
        );
    }

    Ok(outcome.exit_code)
}

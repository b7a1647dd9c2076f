//! ps / status command implementation

use anyhow::Result;
use shopctl_core::{ModeProfile, ServiceName};

use crate::App;

pub async fn execute(
    app: &App,
    profile: &ModeProfile,
    services: &[ServiceName],
    extra: &[String],
) -> Result<i32> {
    println!("\n📋 Containers ({})", profile.mode);
    println!("{:-<60}", "");

    Ok(app.ps(profile, services, extra).await?)
}

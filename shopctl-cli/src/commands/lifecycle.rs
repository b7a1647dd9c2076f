//! up / down / build / restart

use anyhow::Result;
use shopctl_core::{ModeProfile, ServiceName};

use crate::App;

pub async fn up(
    app: &App,
    profile: &ModeProfile,
    services: &[ServiceName],
    extra: &[String],
) -> Result<i32> {
    let code = app.up(profile, services, extra).await?;
    if code == 0 {
        println!("✅ {} stack is up", profile.mode);
    }
    Ok(code)
}

pub async fn down(
    app: &App,
    profile: &ModeProfile,
    services: &[ServiceName],
    extra: &[String],
) -> Result<i32> {
    let code = app.down(profile, services, extra).await?;
    if code == 0 {
        println!("✅ {} stack is down", profile.mode);
    }
    Ok(code)
}

pub async fn build(
    app: &App,
    profile: &ModeProfile,
    services: &[ServiceName],
    extra: &[String],
) -> Result<i32> {
    Ok(app.build(profile, services, extra).await?)
}

pub async fn restart(app: &App, profile: &ModeProfile, services: &[ServiceName]) -> Result<i32> {
    Ok(app.restart(profile, services).await?)
}

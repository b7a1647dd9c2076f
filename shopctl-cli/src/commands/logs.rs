//! Logs command implementation

use anyhow::Result;
use shopctl_core::{ModeProfile, ServiceName};

use crate::App;

/// Follow logs; returns once the orchestrator exits (usually on Ctrl+C)
pub async fn execute(
    app: &App,
    profile: &ModeProfile,
    services: &[ServiceName],
    default: Option<&ServiceName>,
    extra: &[String],
) -> Result<i32> {
    tracing::debug!(mode = %profile.mode, "Following logs");
    Ok(app.logs(profile, services, default, extra).await?)
}

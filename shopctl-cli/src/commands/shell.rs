//! Shell command implementation

use anyhow::Result;
use shopctl_core::{ModeProfile, ServiceName};

use crate::App;

pub async fn execute(
    app: &App,
    profile: &ModeProfile,
    services: &[ServiceName],
    default: Option<&ServiceName>,
) -> Result<i32> {
    let code = app.shell(profile, services, default).await?;
    if code != 0 {
        tracing::warn!(exit_code = code, "Shell exited with an error (is the container running?)");
    }
    Ok(code)
}

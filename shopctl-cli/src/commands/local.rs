//! Backend toolchain pass-through

use anyhow::Result;
use shopctl_compose::LocalTask;

use crate::App;

pub async fn execute(app: &App, task: LocalTask) -> Result<i32> {
    Ok(app.local(task).await?)
}

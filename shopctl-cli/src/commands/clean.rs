//! clean / clean-volumes / clean-all

use anyhow::Result;

use crate::App;

/// How much to remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Containers of both stacks
    Containers,
    /// Containers and volumes of both stacks
    Volumes,
    /// Volumes, named images, and dangling engine resources
    Everything,
}

pub async fn execute(app: &App, level: Level) -> Result<i32> {
    let code = match level {
        Level::Containers => app.clean(false).await?,
        Level::Volumes => app.clean(true).await?,
        Level::Everything => app.clean_all().await?,
    };

    if code == 0 {
        println!("✅ Cleanup complete");
    }

    Ok(code)
}

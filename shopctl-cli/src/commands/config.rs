//! Config command implementation

use anyhow::Result;
use serde::Serialize;
use shopctl_core::{ModeProfile, Settings};

use crate::App;

#[derive(Serialize)]
struct Resolved<'a> {
    profile: &'a ModeProfile,
    settings: &'a Settings,
}

/// Print the profile and settings this invocation would use
pub fn execute(app: &App, profile: &ModeProfile) -> Result<i32> {
    let resolved = Resolved {
        profile,
        settings: app.settings(),
    };

    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(0)
}

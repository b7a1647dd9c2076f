//! Convenience aliases
//!
//! Each alias is a [`Preset`]: a base command with the mode (and for
//! `backend-logs`, the service) already filled in.

use anyhow::Result;
use shopctl_core::{Mode, ServiceName};

use super::{lifecycle, logs};
use crate::App;
use crate::cli::StackArgs;

/// Command an alias expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Up,
    Down,
    Build,
    Logs,
}

/// Base command plus pre-bound values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub verb: Verb,
    /// Overrides `--mode` when set
    pub mode: Option<Mode>,
    /// Replaces `--service` as the default when set
    pub service: Option<&'static str>,
}

impl Preset {
    const fn with_mode(verb: Verb, mode: Mode) -> Self {
        Self {
            verb,
            mode: Some(mode),
            service: None,
        }
    }
}

pub const DEV_UP: Preset = Preset::with_mode(Verb::Up, Mode::Development);
pub const PROD_UP: Preset = Preset::with_mode(Verb::Up, Mode::Production);
pub const DEV_DOWN: Preset = Preset::with_mode(Verb::Down, Mode::Development);
pub const PROD_DOWN: Preset = Preset::with_mode(Verb::Down, Mode::Production);
pub const DEV_BUILD: Preset = Preset::with_mode(Verb::Build, Mode::Development);
pub const PROD_BUILD: Preset = Preset::with_mode(Verb::Build, Mode::Production);
pub const DEV_LOGS: Preset = Preset::with_mode(Verb::Logs, Mode::Development);
pub const PROD_LOGS: Preset = Preset::with_mode(Verb::Logs, Mode::Production);
pub const BACKEND_LOGS: Preset = Preset {
    verb: Verb::Logs,
    mode: None,
    service: Some("backend"),
};

/// Run the base command of `preset`
pub async fn run(
    app: &App,
    stack: &StackArgs,
    preset: &Preset,
    services: &[ServiceName],
) -> Result<i32> {
    let profile = app.profile(preset.mode.unwrap_or(stack.mode));
    let default = match preset.service {
        Some(name) => Some(ServiceName::new(name)?),
        None => stack.service.clone(),
    };
    let extra = stack.extra_args();

    tracing::debug!(?preset, mode = %profile.mode, "Expanding alias");

    match preset.verb {
        Verb::Up => lifecycle::up(app, &profile, services, &extra).await,
        Verb::Down => lifecycle::down(app, &profile, services, &extra).await,
        Verb::Build => lifecycle::build(app, &profile, services, &extra).await,
        Verb::Logs => logs::execute(app, &profile, services, default.as_ref(), &extra).await,
    }
}

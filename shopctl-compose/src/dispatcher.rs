//! Command dispatcher
//!
//! Every public method maps one shopctl command onto the orchestrator (or,
//! for [`LocalTask`]s, onto the backend's own toolchain). Mode-scoped
//! commands take the [`ModeProfile`] resolved once per invocation; nothing
//! here reads ambient state.

use chrono::NaiveDateTime;
use shopctl_core::{CommandSpec, Mode, ModeProfile, Result, ServiceName, Settings};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::backup::backup_file_name;
use crate::{Confirmer, DatabaseCredentials, Executor, ProbeOutcome, Prober};

/// Exit code reported when the operator declines a reset
///
/// Matches a shell interrupted with Ctrl+C.
pub const RESET_ABORTED_EXIT: i32 = 130;

/// Backend toolchain tasks run outside any container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalTask {
    /// Install dependencies
    Install,
    /// Compile the backend
    Compile,
    /// Type-check without emitting
    TypeCheck,
    /// Start the backend's own dev server
    RunDev,
}

impl LocalTask {
    /// Arguments passed to the package manager
    #[must_use]
    pub const fn args(self) -> &'static [&'static str] {
        match self {
            Self::Install => &["install"],
            Self::Compile => &["run", "build"],
            Self::TypeCheck => &["run", "type-check"],
            Self::RunDev => &["run", "dev"],
        }
    }
}

/// One probe in a health report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheck {
    /// Human label
    pub name: &'static str,
    /// Probed URL
    pub url: String,
    /// What came back
    pub outcome: ProbeOutcome,
}

/// Result of `health`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    /// Checks in the order they ran
    pub checks: Vec<HealthCheck>,
}

impl HealthReport {
    /// Whether every probe passed
    #[must_use]
    pub fn all_healthy(&self) -> bool {
        self.checks.iter().all(|c| c.outcome.is_healthy())
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for check in &self.checks {
            writeln!(
                f,
                "{} {}: {} [{}]",
                check.outcome.indicator(),
                check.name,
                check.outcome,
                check.url
            )?;
        }
        Ok(())
    }
}

/// Result of `backup`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupOutcome {
    /// Archive the dump was written to
    pub archive: PathBuf,
    /// Exit code of the dump
    pub exit_code: i32,
}

/// Services to address: positional first, then the default, else all
#[must_use]
pub fn resolve_targets(
    positional: &[ServiceName],
    default: Option<&ServiceName>,
) -> Vec<ServiceName> {
    if !positional.is_empty() {
        return positional.to_vec();
    }

    default.map(|s| vec![s.clone()]).unwrap_or_default()
}

fn names(services: &[ServiceName]) -> impl Iterator<Item = String> + '_ {
    services.iter().map(ToString::to_string)
}

/// Maps commands onto orchestrator invocations
pub struct Dispatcher<E, P, C> {
    settings: Settings,
    executor: E,
    prober: P,
    confirmer: C,
}

impl<E, P, C> fmt::Debug for Dispatcher<E, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl<E, P, C> Dispatcher<E, P, C>
where
    E: Executor,
    P: Prober,
    C: Confirmer,
{
    /// Create a dispatcher over the given backends
    pub const fn new(settings: Settings, executor: E, prober: P, confirmer: C) -> Self {
        Self {
            settings,
            executor,
            prober,
            confirmer,
        }
    }

    /// Settings in use
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve `mode` against these settings
    pub fn profile(&self, mode: Mode) -> ModeProfile {
        self.settings.profile(mode)
    }

    fn compose(&self, profile: &ModeProfile) -> CommandSpec {
        CommandSpec::compose(&self.settings, profile)
    }

    /// Start services in the background
    pub async fn up(
        &self,
        profile: &ModeProfile,
        services: &[ServiceName],
        extra: &[String],
    ) -> Result<i32> {
        info!(mode = %profile.mode, "🚀 Starting services");
        let spec = self
            .compose(profile)
            .args(["up", "-d"])
            .args(extra.iter().cloned())
            .args(names(services));
        self.executor.run(&spec).await
    }

    /// Stop and remove services
    pub async fn down(
        &self,
        profile: &ModeProfile,
        services: &[ServiceName],
        extra: &[String],
    ) -> Result<i32> {
        info!(mode = %profile.mode, "🛑 Stopping services");
        let spec = self
            .compose(profile)
            .arg("down")
            .args(extra.iter().cloned())
            .args(names(services));
        self.executor.run(&spec).await
    }

    /// Build service images
    pub async fn build(
        &self,
        profile: &ModeProfile,
        services: &[ServiceName],
        extra: &[String],
    ) -> Result<i32> {
        info!(mode = %profile.mode, "🔨 Building images");
        let spec = self
            .compose(profile)
            .arg("build")
            .args(extra.iter().cloned())
            .args(names(services));
        self.executor.run(&spec).await
    }

    /// Follow logs until interrupted
    ///
    /// Positional services win over `default`; with neither, every
    /// service is followed.
    pub async fn logs(
        &self,
        profile: &ModeProfile,
        services: &[ServiceName],
        default: Option<&ServiceName>,
        extra: &[String],
    ) -> Result<i32> {
        let targets = resolve_targets(services, default);
        debug!(?targets, "Resolved log targets");

        let spec = self
            .compose(profile)
            .args(["logs", "-f"])
            .args(extra.iter().cloned())
            .args(names(&targets));
        self.executor.run(&spec).await
    }

    /// Restart the named services, or all of them
    pub async fn restart(&self, profile: &ModeProfile, services: &[ServiceName]) -> Result<i32> {
        info!(mode = %profile.mode, "🔄 Restarting services");
        let spec = self.compose(profile).arg("restart").args(names(services));
        self.executor.run(&spec).await
    }

    /// Open an interactive shell in a running container
    ///
    /// Only the first positional service is used. Falls back to `default`,
    /// then to the configured shell service.
    pub async fn shell(
        &self,
        profile: &ModeProfile,
        services: &[ServiceName],
        default: Option<&ServiceName>,
    ) -> Result<i32> {
        if services.len() > 1 {
            warn!(
                ignored = ?&services[1..],
                "shell opens one container; extra services ignored"
            );
        }

        let target = services
            .first()
            .or(default)
            .map_or_else(|| self.settings.shell_service.clone(), ToString::to_string);

        info!(service = %target, "🐚 Opening shell");
        let spec = self
            .compose(profile)
            .arg("exec")
            .arg(target)
            .arg(self.settings.shell_program.clone());
        self.executor.run(&spec).await
    }

    /// List containers for the profile
    pub async fn ps(
        &self,
        profile: &ModeProfile,
        services: &[ServiceName],
        extra: &[String],
    ) -> Result<i32> {
        let spec = self
            .compose(profile)
            .arg("ps")
            .args(extra.iter().cloned())
            .args(names(services));
        self.executor.run(&spec).await
    }

    /// Probe the gateway and the backend behind it
    ///
    /// Both probes always run. Never fails.
    pub async fn health(&self) -> HealthReport {
        let mut checks = Vec::with_capacity(2);

        for (name, url) in [
            ("Gateway", self.settings.gateway_health_url()),
            ("Backend (via gateway)", self.settings.backend_health_url()),
        ] {
            let outcome = self.prober.probe(&url).await;
            if outcome.is_healthy() {
                debug!(url = %url, "Probe passed");
            } else {
                warn!(url = %url, %outcome, "Probe failed");
            }
            checks.push(HealthCheck { name, url, outcome });
        }

        HealthReport { checks }
    }

    /// Dump the database into a timestamped archive
    pub async fn backup(
        &self,
        profile: &ModeProfile,
        credentials: &DatabaseCredentials,
        at: NaiveDateTime,
    ) -> Result<BackupOutcome> {
        tokio::fs::create_dir_all(&self.settings.backups_dir).await?;

        let archive = self.settings.backups_dir.join(backup_file_name(
            &self.settings.backup_tool,
            &profile.suffix,
            at,
        ));

        info!(archive = %archive.display(), "💾 Creating backup");

        let spec = self
            .compose(profile)
            .args(["exec", "-T"])
            .arg(self.settings.database_service.clone())
            .arg("mongodump")
            .arg(format!("--username={}", credentials.username))
            .secret_arg(format!("--password={}", credentials.password))
            .arg("--authenticationDatabase=admin")
            .arg(format!("--db={}", credentials.database))
            .arg("--archive")
            .stdout_to(&archive);

        let exit_code = self.executor.run(&spec).await?;
        if exit_code != 0 {
            warn!(exit_code, archive = %archive.display(), "Backup failed");
        }

        Ok(BackupOutcome { archive, exit_code })
    }

    /// Drop the database after an explicit acknowledgment
    ///
    /// Returns [`RESET_ABORTED_EXIT`] without touching anything when the
    /// operator declines.
    pub async fn reset(
        &self,
        profile: &ModeProfile,
        credentials: &DatabaseCredentials,
    ) -> Result<i32> {
        let prompt = format!(
            "⚠️  WARNING: this drops the '{}' database of the {} ({}) stack.\n\
             Press Enter to continue, Ctrl+C to cancel... ",
            credentials.database, profile.mode, profile.suffix
        );

        if !self.confirmer.confirm(&prompt).await? {
            info!(mode = %profile.mode, "Reset aborted; nothing was dropped");
            return Ok(RESET_ABORTED_EXIT);
        }

        warn!(mode = %profile.mode, database = %credentials.database, "🗑️  Dropping database");

        let spec = self
            .compose(profile)
            .arg("exec")
            .arg(self.settings.database_service.clone())
            .arg("mongosh")
            .arg(format!("--username={}", credentials.username))
            .secret_arg(format!("--password={}", credentials.password))
            .arg("--authenticationDatabase=admin")
            .arg("--quiet")
            .arg("--eval")
            .arg(format!(
                "db.getSiblingDB('{}').dropDatabase()",
                credentials.database
            ));
        self.executor.run(&spec).await
    }

    /// Tear down both stacks, whatever the invocation mode
    ///
    /// Both teardowns always run. Returns the first non-zero exit code, or 0.
    pub async fn clean(&self, volumes: bool) -> Result<i32> {
        let mut first_failure = 0;

        for mode in Mode::ALL {
            info!(mode = %mode, volumes, "🧹 Tearing down");

            let mut spec =
                CommandSpec::compose_file(&self.settings, self.settings.compose_file(mode))
                    .arg("down");
            if volumes {
                spec = spec.arg("-v");
            }

            let code = self.executor.run(&spec).await?;
            if code != 0 {
                warn!(mode = %mode, exit_code = code, "Teardown failed; continuing");
                if first_failure == 0 {
                    first_failure = code;
                }
            }
        }

        Ok(first_failure)
    }

    /// Tear down both stacks with volumes, remove images, prune
    ///
    /// Every step runs. Image removal is best effort and never affects the
    /// exit code; a failed teardown takes precedence over the prune result.
    pub async fn clean_all(&self) -> Result<i32> {
        let teardown = self.clean(true).await?;

        for image in &self.settings.images {
            let spec = CommandSpec::new(self.settings.docker_bin.clone())
                .args(["rmi", "-f"])
                .arg(image.clone());

            match self.executor.run(&spec).await {
                Ok(0) => debug!(image = %image, "Removed image"),
                Ok(code) => {
                    warn!(image = %image, exit_code = code, "Image removal failed; continuing");
                }
                Err(e) => {
                    warn!(image = %image, error = %e, "Image removal failed; continuing");
                }
            }
        }

        info!("🧹 Pruning dangling resources");
        let prune =
            CommandSpec::new(self.settings.docker_bin.clone()).args(["system", "prune", "-f"]);
        let pruned = self.executor.run(&prune).await?;

        Ok(if teardown != 0 { teardown } else { pruned })
    }

    /// Run a backend toolchain task in the backend directory
    pub async fn local(&self, task: LocalTask) -> Result<i32> {
        let spec = CommandSpec::new(self.settings.package_manager.clone())
            .args(task.args().iter().copied())
            .current_dir(self.settings.backend_dir.clone());
        debug!(?task, "Running local task");
        self.executor.run(&spec).await
    }
}

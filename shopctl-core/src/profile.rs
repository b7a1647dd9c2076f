//! Per-invocation configuration
//!
//! [`Settings`] holds everything that does not depend on the mode.
//! [`Settings::profile`] resolves a [`Mode`] once into a [`ModeProfile`],
//! which is then passed explicitly to every operation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::{Mode, Result};

/// Mode-independent settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Container CLI; compose is invoked as `<docker_bin> compose`
    pub docker_bin: String,
    /// Compose file for development
    pub dev_compose_file: PathBuf,
    /// Compose file for production
    pub prod_compose_file: PathBuf,
    /// Backend project directory for the local toolchain
    pub backend_dir: PathBuf,
    /// Local toolchain driver (`npm`)
    pub package_manager: String,
    /// Compose service running the database
    pub database_service: String,
    /// Label used as the backup filename prefix
    pub backup_tool: String,
    /// Service a shell opens into when none is named
    pub shell_service: String,
    /// Program started by `shell`
    pub shell_program: String,
    /// Where backup archives are written
    pub backups_dir: PathBuf,
    /// Base URL of the gateway
    pub gateway_url: String,
    /// Gateway liveness path
    pub gateway_health_path: String,
    /// Backend liveness path, routed through the gateway
    pub backend_health_path: String,
    /// Per-probe timeout in milliseconds
    pub probe_timeout_ms: u64,
    /// Images force-removed by `clean-all`
    pub images: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            docker_bin: "docker".to_string(),
            dev_compose_file: PathBuf::from("docker-compose.dev.yml"),
            prod_compose_file: PathBuf::from("docker-compose.prod.yml"),
            backend_dir: PathBuf::from("backend"),
            package_manager: "npm".to_string(),
            database_service: "mongodb".to_string(),
            backup_tool: "mongodb".to_string(),
            shell_service: "backend".to_string(),
            shell_program: "sh".to_string(),
            backups_dir: PathBuf::from("backups"),
            gateway_url: "http://localhost:8080".to_string(),
            gateway_health_path: "/health".to_string(),
            backend_health_path: "/api/health".to_string(),
            probe_timeout_ms: 5_000,
            images: vec![
                "shop-backend:latest".to_string(),
                "shop-gateway:latest".to_string(),
            ],
        }
    }
}

impl Settings {
    /// Compose file for a mode
    #[must_use]
    pub fn compose_file(&self, mode: Mode) -> &Path {
        match mode {
            Mode::Development => &self.dev_compose_file,
            Mode::Production => &self.prod_compose_file,
        }
    }

    /// Resolve a mode into the profile used for one invocation
    #[must_use]
    pub fn profile(&self, mode: Mode) -> ModeProfile {
        let profile = ModeProfile {
            mode,
            compose_file: self.compose_file(mode).to_path_buf(),
            suffix: mode.suffix().to_string(),
        };

        debug!(
            mode = %mode,
            compose_file = %profile.compose_file.display(),
            "Resolved mode profile"
        );

        profile
    }

    /// Gateway health endpoint
    #[must_use]
    pub fn gateway_health_url(&self) -> String {
        join_url(&self.gateway_url, &self.gateway_health_path)
    }

    /// Backend health endpoint, reached through the gateway
    #[must_use]
    pub fn backend_health_url(&self) -> String {
        join_url(&self.gateway_url, &self.backend_health_path)
    }

    /// Probe timeout
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Render as pretty JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Mode resolved to its configuration handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Selected mode
    pub mode: Mode,
    /// Compose file for that mode
    pub compose_file: PathBuf,
    /// Suffix used in backup names and prompts
    pub suffix: String,
}

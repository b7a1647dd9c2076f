//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use shopctl_core::{Mode, ServiceName, Settings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopctl")]
#[command(about = "Mode-aware compose dispatcher for the shop stack", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(flatten)]
    pub stack: StackArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command, with `MODE=`/`SERVICE=`/`ARGS=`
/// style environment fallbacks
#[derive(Args, Debug, Clone)]
pub struct StackArgs {
    /// Deployment mode (development|dev|production|prod)
    #[arg(short, long, global = true, env = "MODE", default_value_t = Mode::Development)]
    pub mode: Mode,

    /// Default service for logs and shell
    #[arg(short, long, global = true, env = "SERVICE")]
    pub service: Option<ServiceName>,

    /// Extra flags forwarded to the orchestrator (whitespace separated)
    #[arg(long = "args", global = true, env = "ARGS", allow_hyphen_values = true)]
    pub extra_args: Option<String>,

    /// Container CLI used for compose and image commands
    #[arg(long, global = true, env = "DOCKER_BIN")]
    pub docker_bin: Option<String>,

    /// Gateway base URL for health probes
    #[arg(long, global = true, env = "GATEWAY_URL")]
    pub gateway_url: Option<String>,

    /// Development compose file
    #[arg(long, global = true, env = "COMPOSE_DEV_FILE")]
    pub compose_dev: Option<PathBuf>,

    /// Production compose file
    #[arg(long, global = true, env = "COMPOSE_PROD_FILE")]
    pub compose_prod: Option<PathBuf>,

    /// Directory receiving backup archives
    #[arg(long, global = true, env = "BACKUPS_DIR")]
    pub backups_dir: Option<PathBuf>,
}

impl StackArgs {
    /// Default settings with command-line overrides applied
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(bin) = &self.docker_bin {
            settings.docker_bin.clone_from(bin);
        }
        if let Some(url) = &self.gateway_url {
            settings.gateway_url.clone_from(url);
        }
        if let Some(file) = &self.compose_dev {
            settings.dev_compose_file.clone_from(file);
        }
        if let Some(file) = &self.compose_prod {
            settings.prod_compose_file.clone_from(file);
        }
        if let Some(dir) = &self.backups_dir {
            settings.backups_dir.clone_from(dir);
        }

        settings
    }

    /// `--args` split the way a shell splits an unquoted variable
    pub fn extra_args(&self) -> Vec<String> {
        self.extra_args
            .as_deref()
            .map(|args| args.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Positional services, forwarded verbatim and in order
#[derive(Args, Debug, Clone, Default)]
pub struct ServiceArgs {
    /// Services to act on (default: all)
    pub services: Vec<ServiceName>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start services in detached mode
    Up(ServiceArgs),

    /// Stop and remove services
    Down(ServiceArgs),

    /// Build service images
    Build(ServiceArgs),

    /// Follow service logs until interrupted
    Logs(ServiceArgs),

    /// Restart services
    Restart(ServiceArgs),

    /// Open a shell inside a running service container
    Shell(ServiceArgs),

    /// List running containers
    #[command(visible_alias = "status")]
    Ps(ServiceArgs),

    /// Probe the gateway and the backend behind it
    Health,

    /// Dump the database into a timestamped archive
    Backup,

    /// Drop the database (asks for confirmation)
    Reset,

    /// Tear down both development and production stacks
    Clean,

    /// Tear down both stacks and their volumes
    CleanVolumes,

    /// Tear down everything, remove images and prune
    CleanAll,

    /// Install backend dependencies locally
    Install,

    /// Compile the backend locally
    Compile,

    /// Type-check the backend locally
    TypeCheck,

    /// Run the backend's dev server locally
    RunDev,

    /// Alias: up in development mode
    DevUp(ServiceArgs),

    /// Alias: up in production mode
    ProdUp(ServiceArgs),

    /// Alias: down in development mode
    DevDown(ServiceArgs),

    /// Alias: down in production mode
    ProdDown(ServiceArgs),

    /// Alias: build in development mode
    DevBuild(ServiceArgs),

    /// Alias: build in production mode
    ProdBuild(ServiceArgs),

    /// Alias: logs in development mode
    DevLogs(ServiceArgs),

    /// Alias: logs in production mode
    ProdLogs(ServiceArgs),

    /// Alias: logs for the backend service
    BackendLogs(ServiceArgs),

    /// Print the resolved configuration as JSON
    Config,

    /// Show version information
    Version,
}

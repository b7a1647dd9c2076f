use crate::App;
use crate::cli::{Commands, StackArgs};
use anyhow::Result;
use shopctl_compose::LocalTask;

pub mod aliases;
pub mod backup;
pub mod clean;
pub mod config;
pub mod health;
pub mod lifecycle;
pub mod local;
pub mod logs;
pub mod reset;
pub mod shell;
pub mod status;

/// Dispatch command to appropriate handler
///
/// Returns the exit code to report.
pub async fn dispatch(app: &App, stack: &StackArgs, command: Commands) -> Result<i32> {
    let profile = app.profile(stack.mode);
    let extra = stack.extra_args();
    let default_service = stack.service.as_ref();

    match command {
        Commands::Up(args) => lifecycle::up(app, &profile, &args.services, &extra).await,
        Commands::Down(args) => lifecycle::down(app, &profile, &args.services, &extra).await,
        Commands::Build(args) => lifecycle::build(app, &profile, &args.services, &extra).await,
        Commands::Restart(args) => lifecycle::restart(app, &profile, &args.services).await,

        Commands::Logs(args) => {
            logs::execute(app, &profile, &args.services, default_service, &extra).await
        }

        Commands::Shell(args) => {
            shell::execute(app, &profile, &args.services, default_service).await
        }

        Commands::Ps(args) => status::execute(app, &profile, &args.services, &extra).await,

        Commands::Health => health::execute(app).await,

        Commands::Backup => backup::execute(app, &profile).await,

        Commands::Reset => reset::execute(app, &profile).await,

        Commands::Clean => clean::execute(app, clean::Level::Containers).await,
        Commands::CleanVolumes => clean::execute(app, clean::Level::Volumes).await,
        Commands::CleanAll => clean::execute(app, clean::Level::Everything).await,

        Commands::Install => local::execute(app, LocalTask::Install).await,
        Commands::Compile => local::execute(app, LocalTask::Compile).await,
        Commands::TypeCheck => local::execute(app, LocalTask::TypeCheck).await,
        Commands::RunDev => local::execute(app, LocalTask::RunDev).await,

        Commands::DevUp(args) => aliases::run(app, stack, &aliases::DEV_UP, &args.services).await,
        Commands::ProdUp(args) => aliases::run(app, stack, &aliases::PROD_UP, &args.services).await,
        Commands::DevDown(args) => {
            aliases::run(app, stack, &aliases::DEV_DOWN, &args.services).await
        }
        Commands::ProdDown(args) => {
            aliases::run(app, stack, &aliases::PROD_DOWN, &args.services).await
        }
        Commands::DevBuild(args) => {
            aliases::run(app, stack, &aliases::DEV_BUILD, &args.services).await
        }
        Commands::ProdBuild(args) => {
            aliases::run(app, stack, &aliases::PROD_BUILD, &args.services).await
        }
        Commands::DevLogs(args) => {
            aliases::run(app, stack, &aliases::DEV_LOGS, &args.services).await
        }
        Commands::ProdLogs(args) => {
            aliases::run(app, stack, &aliases::PROD_LOGS, &args.services).await
        }
        Commands::BackendLogs(args) => {
            aliases::run(app, stack, &aliases::BACKEND_LOGS, &args.services).await
        }

        Commands::Config => config::execute(app, &profile),

        Commands::Version => {
            crate::print_version();
            Ok(0)
        }
    }
}

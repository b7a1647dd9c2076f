//! Compose dispatching with pluggable backends
//!
//! The [`Dispatcher`] turns each shopctl command into one or more
//! [`CommandSpec`](shopctl_core::CommandSpec)s and hands them to an
//! [`Executor`]. Health probes and the reset confirmation go through the
//! [`Prober`] and [`Confirmer`] traits so every side effect can be swapped
//! for a mock in tests.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod backend;
pub mod backup;
pub mod confirm;
pub mod credentials;
pub mod dispatcher;
pub mod probe;
pub mod process;

pub use backend::{Executor, MockExecutor};
pub use backup::backup_file_name;
pub use confirm::{Confirmer, MockConfirmer, StdinConfirmer};
pub use credentials::DatabaseCredentials;
pub use dispatcher::{
    BackupOutcome, Dispatcher, HealthCheck, HealthReport, LocalTask, RESET_ABORTED_EXIT,
    resolve_targets,
};
pub use probe::{HttpProber, MockProber, ProbeOutcome, Prober};
pub use process::{DryRunExecutor, SystemExecutor};

// Re-export commonly used types
pub use shopctl_core::{CommandSpec, Mode, ModeProfile, Output, ServiceName, Settings};

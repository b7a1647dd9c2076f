//! shopctl Core - Foundation types for the deployment dispatcher
//!
//! This crate provides the mode, profile and command abstractions used
//! throughout shopctl. Nothing here talks to the container runtime.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod profile;
pub mod spec;
pub mod types;

pub use error::{Error, Result};
pub use profile::{ModeProfile, Settings};
pub use spec::{CommandSpec, Output, REDACTED};
pub use types::{Mode, ServiceName};

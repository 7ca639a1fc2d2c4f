//! nvmc library interface
//!
//! Startup surface of the nvmc compiler front-end: a declarative argument
//! registry, the resolved compiler configuration, and the driver that wires
//! the two together.
//!
//! # Module Organization
//!
//! - [`args`] - Argument registry, parser, and typed value access
//! - [`config`] - Resolved compiler configuration ([`config::Config`])
//! - [`errors`] - Error types (NvmcError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main startup logic
//! - [`logging`] - Log level mapping and subscriber setup

pub mod args;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod status;

pub use args::{ArgRegistry, FromOptionValue, Requirement};
pub use config::{BuildType, Config};
pub use errors::{NvmcError, Result};
pub use status::ExitStatus;

//! Command-line interface and orchestration for devlevel
//!
//! This module implements the CLI commands and wires the other modules together to turn a
//! username into a rendered profile. It handles argument parsing, configuration management
//! and the top-level workflow.
//!
//! # Implementation Model
//!
//! The module is organized around three commands:
//!
//! ## Commands
//!
//! - **profile**: Collect a user's GitHub resources, aggregate and score them, and render the
//!   resulting profile on the console or as JSON
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and values
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the appropriate
//! command handler. The profile command loads the configuration, builds a [`crate::facts::Client`]
//! from it, runs [`crate::profile::get_profile`] and hands the outcome to the reports.
//!
//! All output goes through the [`Host`] trait so the commands can be exercised in-process.

mod common;
mod config;
mod host;
mod init;
mod profile;
mod run;
mod validate;

pub use common::{ColorMode, LogLevel, init_logging};
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use profile::{OutputFormat, ProfileArgs, process_profile};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};

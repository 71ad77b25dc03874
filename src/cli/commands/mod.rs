//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that talk to GitLab or
//! Gogs resolve [`Settings`](crate::config::Settings) themselves, so
//! `completions` works without any configuration.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod run;
pub mod services;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

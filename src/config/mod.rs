//! Configuration loading and validation.
//!
//! Settings come from three layers, highest precedence first:
//!
//! 1. Command-line flags
//! 2. Process environment variables
//! 3. A `.env` file (never overrides variables that are already set)
//!
//! - [`EnvFileParser`] / [`apply_env_file`] - `.env` handling
//! - [`RawSettings`] / [`Settings`] - Collected and validated settings

pub mod env_file;
pub mod settings;

pub use env_file::{apply_env_file, EnvFileParser};
pub use settings::{RawSettings, Settings, DEFAULT_GITLAB_HOST, DEFAULT_TIMEOUT_SECS};

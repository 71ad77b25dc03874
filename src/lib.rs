//! gogs-mirror - Back up a GitLab group to a Gogs instance.
//!
//! Every non-archived project of the group, subgroups included, is cloned
//! with `git clone --mirror` and pushed with `git push --mirror` to a
//! repository of the same name on Gogs. Missing Gogs repositories are
//! created on the way, keeping the GitLab description and visibility.
//!
//! # Modules
//!
//! - [`backup`] - Per-project backup orchestration and run summaries
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Environment files and settings validation
//! - [`error`] - Error types and result aliases
//! - [`git`] - Mirror clones and pushes through the `git` binary
//! - [`gitlab`] - GitLab REST API client
//! - [`gogs`] - Gogs REST API client
//! - [`secrets`] - Token masking for everything that reaches the user
//! - [`ui`] - Spinners, summaries and terminal output
//!
//! # Example
//!
//! ```
//! use gogs_mirror::config::{RawSettings, Settings};
//!
//! let raw = RawSettings {
//!     gitlab_token: Some("glpat-xxxx".into()),
//!     gitlab_group: Some("acme".into()),
//!     gogs_url: Some("gogs.example.com".into()),
//!     gogs_username: Some("alice".into()),
//!     gogs_token: Some("yyyy".into()),
//!     ..Default::default()
//! };
//! let settings = Settings::resolve(raw).unwrap();
//! assert_eq!(settings.gogs_url, "https://gogs.example.com");
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod gitlab;
pub mod gogs;
pub mod secrets;
pub mod ui;

pub use error::{MirrorError, Result};

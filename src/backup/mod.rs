//! Backup orchestration.
//!
//! - [`BackupRunner`] - Walks a GitLab group and mirrors each project to Gogs
//! - [`ProjectFilter`] - Selects which projects take part
//! - [`BackupSummary`] - Per-run results, exit code and JSON report
//! - [`ProjectSource`], [`MirrorTarget`], [`RepoTransport`] - Seams to the outside world
//!
//! Each project is handled in its own temporary directory:
//!
//! 1. fetch the full project record
//! 2. `git clone --mirror` from GitLab
//! 3. create the Gogs repository if it does not exist yet
//! 4. repoint `origin` at Gogs and `git push --mirror`
//!
//! A failure in any step is recorded and the run moves on to the next project.

pub mod filter;
pub mod runner;
pub mod seams;
pub mod summary;

pub use filter::ProjectFilter;
pub use runner::{plan_backups, BackupOptions, BackupOutcome, BackupRunner, PlannedBackup};
pub use seams::{GitTransport, MirrorTarget, ProjectSource, RepoTransport};
pub use summary::{format_duration, BackupSummary, FailedBackup};

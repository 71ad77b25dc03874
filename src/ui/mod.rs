//! User-facing terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! Diagnostics go through `tracing`; this module is only for what the user
//! is meant to read.
//!
//! # Example
//!
//! ```
//! use gogs_mirror::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Silent);
//! ui.show_header("acme");
//! ui.success("Backup complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, MirrorTheme};

use crate::backup::BackupSummary;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the end-of-run summary.
    fn show_summary(&mut self, summary: &BackupSummary);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);
}

/// Plain-text lines of a summary, shared by the non-styled UIs.
pub(crate) fn summary_lines(summary: &BackupSummary) -> Vec<String> {
    let mut lines = vec![
        "Backup Summary:".to_string(),
        format!("Successful: {} repositories", summary.successful.len()),
        format!("Failed: {} repositories", summary.failed.len()),
    ];
    if summary.dry_run {
        lines.push(format!("Dry run: {} repositories inspected", summary.skipped.len()));
    }
    if !summary.failed.is_empty() {
        lines.push("Failed repositories:".to_string());
        for failed in &summary.failed {
            lines.push(format!("  - {}: {}", failed.name, failed.error));
        }
    }
    lines
}

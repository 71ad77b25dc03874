//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use gogs_mirror::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! ui.message("Found 3 projects to backup");
//! let mut spinner = ui.start_spinner("[001/003] acme/api");
//! spinner.finish_success("[001/003] acme/api");
//!
//! assert!(ui.has_message("3 projects"));
//! assert_eq!(ui.spinner_successes(), vec!["[001/003] acme/api".to_string()]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::backup::BackupSummary;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// How each spinner ended, shared between a [`MockUI`] and its spinners.
#[derive(Debug, Default)]
struct SpinnerLog {
    successes: Vec<String>,
    errors: Vec<String>,
    skips: Vec<String>,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    summaries: Vec<BackupSummary>,
    spinner_log: Rc<RefCell<SpinnerLog>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Messages of every spinner that was started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    pub fn summaries(&self) -> &[BackupSummary] {
        &self.summaries
    }

    pub fn spinner_successes(&self) -> Vec<String> {
        self.spinner_log.borrow().successes.clone()
    }

    pub fn spinner_errors(&self) -> Vec<String> {
        self.spinner_log.borrow().errors.clone()
    }

    pub fn spinner_skips(&self) -> Vec<String> {
        self.spinner_log.borrow().skips.clone()
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            log: Rc::clone(&self.spinner_log),
            message: message.to_string(),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_summary(&mut self, summary: &BackupSummary) {
        self.summaries.push(summary.clone());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner handed out by [`MockUI`]; records how it finished.
#[derive(Debug)]
pub struct MockSpinner {
    log: Rc<RefCell<SpinnerLog>>,
    message: String,
}

impl MockSpinner {
    /// Current spinner message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.message = msg.to_string();
    }

    fn finish_success(&mut self, msg: &str) {
        self.log.borrow_mut().successes.push(msg.to_string());
    }

    fn finish_error(&mut self, msg: &str) {
        self.log.borrow_mut().errors.push(msg.to_string());
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.log.borrow_mut().skips.push(msg.to_string());
    }
}

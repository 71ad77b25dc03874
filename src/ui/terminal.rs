//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::backup::{format_duration, BackupSummary};

use super::{
    should_use_colors, MirrorTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: MirrorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            MirrorTheme::new()
        } else {
            MirrorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_summary(&mut self, summary: &BackupSummary) {
        if !self.mode.shows_summary() {
            return;
        }

        let b = &self.theme.border;
        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            b.apply_to("Backup Summary ───────────────────")
        )
        .ok();

        for failed in &summary.failed {
            writeln!(
                self.term,
                "  {} {} {}",
                b.apply_to("│"),
                self.theme.format_error(&failed.name),
                self.theme.dim.apply_to(&failed.error)
            )
            .ok();
        }
        if !summary.failed.is_empty() {
            writeln!(
                self.term,
                "  {}",
                b.apply_to("├────────────────────────────────────")
            )
            .ok();
        }

        let mut totals = format!(
            "{} successful {} {} failed",
            self.theme.success.apply_to(summary.successful.len()),
            self.theme.dim.apply_to("·"),
            self.theme.error.apply_to(summary.failed.len()),
        );
        if summary.dry_run {
            totals.push_str(&format!(
                " {} {} inspected (dry run)",
                self.theme.dim.apply_to("·"),
                summary.skipped.len()
            ));
        }
        if let Some(elapsed) = summary.duration() {
            totals.push_str(&format!(
                " {} {}",
                self.theme.dim.apply_to("·"),
                self.theme.dim.apply_to(format_duration(elapsed))
            ));
        }
        writeln!(self.term, "  {} {}", b.apply_to("│"), totals).ok();
        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Check whether we are running under a CI system.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

//! Check command implementation.
//!
//! The `gogs-mirror check` command validates the settings and both sets of
//! credentials without cloning, creating or pushing anything.

use crate::config::{RawSettings, Settings};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::services::{connect_gitlab, connect_gogs};

/// The check command implementation.
pub struct CheckCommand {
    settings: RawSettings,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(settings: RawSettings) -> Self {
        Self { settings }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = Settings::resolve(self.settings.clone())?;
        settings.log_summary();
        ui.success("Configuration is complete");

        let gitlab = connect_gitlab(&settings)?;
        let group = gitlab.group(&settings.gitlab_group)?;
        ui.success(&format!(
            "GitLab: authenticated at {}, group {} (id {})",
            settings.gitlab_url, group.name, group.id
        ));

        let gogs = connect_gogs(&settings)?;
        ui.success(&format!(
            "Gogs: repositories will be created under {} at {}",
            gogs.owner(),
            settings.gogs_url
        ));

        Ok(CommandResult::success())
    }
}

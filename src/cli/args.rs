//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! Every connection setting can come from a flag or from the environment
//! variable named next to it. Flags win.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::backup::ProjectFilter;
use crate::config::RawSettings;

/// gogs-mirror - Back up every project of a GitLab group to Gogs.
#[derive(Debug, Parser)]
#[command(name = "gogs-mirror")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Environment file to load before reading settings (default: ./.env when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Connection settings as given, before validation.
    pub fn raw_settings(&self) -> RawSettings {
        self.connection.clone().into()
    }
}

/// Where to read from and where to write to.
#[derive(Debug, Clone, Default, clap::Args)]
#[command(next_help_heading = "Connection")]
pub struct ConnectionArgs {
    /// GitLab host (default: gitlab.com)
    #[arg(long, env = "GITLAB_HOST_URL", global = true, value_name = "HOST")]
    pub gitlab_host: Option<String>,

    /// GitLab personal access token
    #[arg(
        long,
        env = "GITLAB_TOKEN",
        hide_env_values = true,
        global = true,
        value_name = "TOKEN"
    )]
    pub gitlab_token: Option<String>,

    /// GitLab group id or full path
    #[arg(long, env = "GITLAB_GROUP_ID", global = true, value_name = "GROUP")]
    pub group: Option<String>,

    /// Gogs instance URL
    #[arg(long, env = "GOGS_INSTANCE_URL", global = true, value_name = "URL")]
    pub gogs_url: Option<String>,

    /// Gogs user the access token belongs to
    #[arg(long, env = "GOGS_USERNAME", global = true, value_name = "USER")]
    pub gogs_username: Option<String>,

    /// Gogs access token
    #[arg(
        long,
        env = "GOGS_ACCESS_TOKEN",
        hide_env_values = true,
        global = true,
        value_name = "TOKEN"
    )]
    pub gogs_token: Option<String>,

    /// Gogs organization to create repositories in (default: the user)
    #[arg(long, env = "GOGS_ORG", global = true, value_name = "ORG")]
    pub gogs_org: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        env = "GOGS_MIRROR_TIMEOUT",
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,
}

impl From<ConnectionArgs> for RawSettings {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            gitlab_host: args.gitlab_host,
            gitlab_token: args.gitlab_token,
            gitlab_group: args.group,
            gogs_url: args.gogs_url,
            gogs_username: args.gogs_username,
            gogs_token: args.gogs_token,
            gogs_org: args.gogs_org,
            timeout_secs: args.timeout,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mirror the group to Gogs (default if no command specified)
    Run(RunArgs),

    /// List the projects a run would back up
    List(ListArgs),

    /// Validate settings and credentials without touching any repository
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Project selection shared by `run` and `list`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SelectionArgs {
    /// Back up only these projects (comma-separated paths or names)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip these projects (comma-separated paths or names)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Include archived projects
    #[arg(long)]
    pub include_archived: bool,
}

impl SelectionArgs {
    pub fn filter(&self) -> ProjectFilter {
        ProjectFilter {
            only: self.only.clone(),
            skip: self.skip.clone(),
            include_archived: self.include_archived,
        }
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Check what would happen without cloning, creating or pushing
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON report of the run to this file
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

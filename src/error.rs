//! Error types for gogs-mirror operations.
//!
//! This module defines [`MirrorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MirrorError` for failures that need distinct handling or wording
//! - Use `anyhow::Error` (via `MirrorError::Other`) for unexpected errors
//! - Messages may end up in logs, so callers mask tokens before surfacing them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gogs-mirror operations.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// One or more required settings were not provided.
    #[error("Missing required environment variables: {}", vars.join(", "))]
    MissingConfig { vars: Vec<String> },

    /// A configured URL could not be parsed or used.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// An explicitly requested env file does not exist.
    #[error("Env file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    /// GitLab answered with a non-success status.
    #[error("GitLab API error: HTTP {status} for {endpoint}")]
    GitLabApi { status: u16, endpoint: String },

    /// Gogs answered with a non-success status.
    #[error("Gogs API error: HTTP {status} for {endpoint}")]
    GogsApi { status: u16, endpoint: String },

    /// The configured Gogs organization does not exist.
    #[error(
        "Organization '{org}' not found in Gogs. Please create the organization first \
         or check the organization name."
    )]
    OrgNotFound { org: String },

    /// The token cannot see the configured Gogs organization.
    #[error(
        "Access denied to organization '{org}'. Please ensure your token has permission \
         to access this organization."
    )]
    OrgAccessDenied { org: String },

    /// Repository creation inside an organization was rejected with 404.
    #[error(
        "Organization '{org}' not found or you don't have permission to create repos in it. \
         Please verify: 1) Organization exists in Gogs, 2) Your token has org repo creation \
         permissions"
    )]
    OrgCreateDenied { org: String },

    /// Two GitLab projects map onto the same Gogs repository.
    #[error("Gogs repository '{repo}' is already the target of {existing}")]
    TargetConflict { repo: String, existing: String },

    /// A git subprocess failed.
    #[error("git {command} failed: {message}")]
    GitCommand { command: String, message: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gogs-mirror operations.
pub type Result<T> = std::result::Result<T, MirrorError>;

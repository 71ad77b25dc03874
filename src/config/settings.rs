//! Validated runtime settings.
//!
//! [`RawSettings`] carries whatever the command line and environment
//! provided. [`Settings::resolve`] turns it into a [`Settings`] or reports
//! every missing required variable at once.

use std::fmt;
use std::time::Duration;

use reqwest::Url;
use tracing::info;

use crate::error::{MirrorError, Result};
use crate::gogs::RepoOwner;
use crate::secrets::OutputMasker;

/// Host used when `GITLAB_HOST_URL` is not set.
pub const DEFAULT_GITLAB_HOST: &str = "gitlab.com";

/// Timeout for every HTTP request when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Unvalidated settings as collected from flags and environment variables.
#[derive(Debug, Clone, Default)]
pub struct RawSettings {
    pub gitlab_host: Option<String>,
    pub gitlab_token: Option<String>,
    pub gitlab_group: Option<String>,
    pub gogs_url: Option<String>,
    pub gogs_username: Option<String>,
    pub gogs_token: Option<String>,
    pub gogs_org: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Validated settings for a backup run.
#[derive(Clone)]
pub struct Settings {
    /// GitLab base URL, without trailing slash.
    pub gitlab_url: String,
    pub gitlab_token: String,
    /// Numeric group id or full group path.
    pub gitlab_group: String,
    /// Gogs base URL, without trailing slash.
    pub gogs_url: String,
    pub gogs_username: String,
    pub gogs_token: String,
    /// Target organization; `None` means repositories go under the user.
    pub gogs_org: Option<String>,
    pub timeout: Duration,
}

/// Treat unset and blank values alike.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl RawSettings {
    /// A masker primed with whichever tokens were provided.
    ///
    /// Usable before validation, so errors from resolving settings or
    /// connecting can be masked too.
    pub fn masker(&self) -> OutputMasker {
        let mut masker = OutputMasker::new();
        masker.add_secrets(
            [&self.gitlab_token, &self.gogs_token]
                .into_iter()
                .filter_map(present),
        );
        masker
    }
}

/// Prepend `https://` to bare hosts, strip trailing slashes and check the result parses.
fn normalize_base_url(raw: &str) -> Result<String> {
    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    let normalized = with_scheme.trim_end_matches('/').to_string();

    let parsed = Url::parse(&normalized).map_err(|e| MirrorError::InvalidUrl {
        url: normalized.clone(),
        message: e.to_string(),
    })?;
    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err(MirrorError::InvalidUrl {
            url: normalized,
            message: "expected an http(s) URL with a host".to_string(),
        });
    }

    Ok(normalized)
}

impl Settings {
    /// Validate and normalize raw settings.
    ///
    /// # Example
    ///
    /// ```
    /// use gogs_mirror::config::{RawSettings, Settings};
    ///
    /// let raw = RawSettings {
    ///     gitlab_token: Some("glpat-1".into()),
    ///     gitlab_group: Some("42".into()),
    ///     gogs_url: Some("https://gogs.example.com/".into()),
    ///     gogs_username: Some("alice".into()),
    ///     gogs_token: Some("gogs-1".into()),
    ///     ..Default::default()
    /// };
    ///
    /// let settings = Settings::resolve(raw).unwrap();
    /// assert_eq!(settings.gitlab_url, "https://gitlab.com");
    /// assert_eq!(settings.gogs_url, "https://gogs.example.com");
    /// ```
    pub fn resolve(raw: RawSettings) -> Result<Self> {
        let required = [
            ("GITLAB_TOKEN", present(&raw.gitlab_token)),
            ("GITLAB_GROUP_ID", present(&raw.gitlab_group)),
            ("GOGS_INSTANCE_URL", present(&raw.gogs_url)),
            ("GOGS_USERNAME", present(&raw.gogs_username)),
            ("GOGS_ACCESS_TOKEN", present(&raw.gogs_token)),
        ];

        let missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(MirrorError::MissingConfig { vars: missing });
        }

        let [gitlab_token, gitlab_group, gogs_url, gogs_username, gogs_token] =
            required.map(|(_, value)| value.unwrap_or_default());

        let gitlab_host =
            present(&raw.gitlab_host).unwrap_or_else(|| DEFAULT_GITLAB_HOST.to_string());

        Ok(Self {
            gitlab_url: normalize_base_url(&gitlab_host)?,
            gitlab_token,
            gitlab_group,
            gogs_url: normalize_base_url(&gogs_url)?,
            gogs_username,
            gogs_token,
            gogs_org: present(&raw.gogs_org),
            timeout: Duration::from_secs(raw.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }

    /// Owner that mirrored repositories are created under.
    pub fn owner(&self) -> RepoOwner {
        match &self.gogs_org {
            Some(org) => RepoOwner::Org(org.clone()),
            None => RepoOwner::User(self.gogs_username.clone()),
        }
    }

    /// A masker primed with both access tokens.
    pub fn masker(&self) -> OutputMasker {
        let mut masker = OutputMasker::new();
        masker.add_secrets([self.gitlab_token.as_str(), self.gogs_token.as_str()]);
        masker
    }

    /// Log the non-secret parts of the configuration.
    pub fn log_summary(&self) {
        info!("GitLab URL: {}", self.gitlab_url);
        info!("GitLab Group ID: {}", self.gitlab_group);
        info!("Gogs URL: {}", self.gogs_url);
        info!("Gogs Username: {}", self.gogs_username);
        info!(
            "Gogs Organization: '{}' (empty means personal repos)",
            self.gogs_org.as_deref().unwrap_or_default()
        );
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("gitlab_url", &self.gitlab_url)
            .field("gitlab_token", &"***")
            .field("gitlab_group", &self.gitlab_group)
            .field("gogs_url", &self.gogs_url)
            .field("gogs_username", &self.gogs_username)
            .field("gogs_token", &"***")
            .field("gogs_org", &self.gogs_org)
            .field("timeout", &self.timeout)
            .finish()
    }
}

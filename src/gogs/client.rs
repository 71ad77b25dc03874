//! Blocking Gogs REST v1 client.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::{Method, StatusCode, Url};
use tracing::{debug, info};

use super::types::{CreateRepoOption, GogsRepository, RepoOwner};
use crate::error::{MirrorError, Result};

/// Talks to a Gogs instance on behalf of one user, creating repositories
/// under a fixed [`RepoOwner`].
pub struct GogsClient {
    base_url: String,
    username: String,
    token: String,
    owner: RepoOwner,
    client: Client,
}

impl GogsClient {
    /// Create a client for the instance at `base_url` (no trailing slash).
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
        owner: RepoOwner,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gogs-mirror/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            username: username.into(),
            token: token.into(),
            owner,
            client,
        })
    }

    /// Owner new repositories are created under.
    pub fn owner(&self) -> &RepoOwner {
        &self.owner
    }

    /// Check that the configured organization exists and is visible.
    ///
    /// Does nothing when repositories go under the user.
    pub fn verify_org(&self) -> Result<()> {
        let Some(org) = self.owner.org() else {
            return Ok(());
        };

        let url = self.api_url(&["orgs", org])?;
        let endpoint = url.path().to_string();
        let response = self.request(Method::GET, url, None)?;

        match response.status() {
            s if s.is_success() => {
                info!("Verified organization '{}' exists in Gogs", org);
                Ok(())
            }
            StatusCode::NOT_FOUND => Err(MirrorError::OrgNotFound {
                org: org.to_string(),
            }),
            StatusCode::FORBIDDEN => Err(MirrorError::OrgAccessDenied {
                org: org.to_string(),
            }),
            s => Err(MirrorError::GogsApi {
                status: s.as_u16(),
                endpoint,
            }),
        }
    }

    /// Whether `owner/name` already exists.
    pub fn repo_exists(&self, name: &str) -> Result<bool> {
        let url = self.api_url(&["repos", self.owner.name(), name])?;
        let endpoint = url.path().to_string();
        debug!("Checking if repo exists at: {}", endpoint);

        let response = self.request(Method::GET, url, None)?;
        match response.status() {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            s => Err(MirrorError::GogsApi {
                status: s.as_u16(),
                endpoint,
            }),
        }
    }

    /// Create a repository under the configured owner.
    ///
    /// A 409 means someone created it in the meantime and counts as success.
    pub fn create_repo(&self, option: &CreateRepoOption) -> Result<GogsRepository> {
        let url = match &self.owner {
            RepoOwner::Org(org) => self.api_url(&["org", org, "repos"])?,
            RepoOwner::User(_) => self.api_url(&["user", "repos"])?,
        };
        let endpoint = url.path().to_string();
        info!(
            "Creating repo for {} using endpoint: {}",
            self.owner, endpoint
        );
        debug!("Repository data: {:?}", option);

        let response = self.request(Method::POST, url, Some(option))?;
        match response.status() {
            s if s.is_success() => Ok(response.json()?),
            StatusCode::CONFLICT => {
                info!("Repository {} already exists in Gogs", option.name);
                Ok(GogsRepository::existing(&option.name))
            }
            StatusCode::NOT_FOUND if self.owner.org().is_some() => {
                Err(MirrorError::OrgCreateDenied {
                    org: self.owner.name().to_string(),
                })
            }
            s => Err(MirrorError::GogsApi {
                status: s.as_u16(),
                endpoint,
            }),
        }
    }

    /// Push URL for `owner/name.git` with the user's token embedded.
    pub fn clone_url(&self, name: &str) -> Result<Url> {
        let invalid = |message: String| MirrorError::InvalidUrl {
            url: self.base_url.clone(),
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(self.owner.name())
            .push(&format!("{name}.git"));
        url.set_username(&self.username)
            .map_err(|_| invalid("URL cannot carry credentials".to_string()))?;
        url.set_password(Some(&self.token))
            .map_err(|_| invalid("URL cannot carry credentials".to_string()))?;
        Ok(url)
    }

    /// Build `{base}/api/v1/<segments>`, percent-encoding each segment.
    pub fn api_url(&self, segments: &[&str]) -> Result<Url> {
        let root = format!("{}/api/v1", self.base_url);
        let mut url = Url::parse(&root).map_err(|e| MirrorError::InvalidUrl {
            url: root.clone(),
            message: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| MirrorError::InvalidUrl {
                url: root.clone(),
                message: "URL cannot be a base".to_string(),
            })?
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<&CreateRepoOption>,
    ) -> Result<Response> {
        debug!("{} {}", method, url.path());
        let mut request = self
            .client
            .request(method, url)
            .header("Authorization", format!("token {}", self.token));
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send()?)
    }
}

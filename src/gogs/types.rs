//! Gogs REST v1 request and response shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gitlab::GitLabProject;

/// Where mirrored repositories live on Gogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOwner {
    /// An organization the token can create repositories in.
    Org(String),
    /// The token owner's personal namespace.
    User(String),
}

impl RepoOwner {
    /// Owner segment used in repository paths and clone URLs.
    pub fn name(&self) -> &str {
        match self {
            Self::Org(name) | Self::User(name) => name,
        }
    }

    /// Organization name, if repositories go into one.
    pub fn org(&self) -> Option<&str> {
        match self {
            Self::Org(name) => Some(name),
            Self::User(_) => None,
        }
    }
}

impl fmt::Display for RepoOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Org(name) => write!(f, "organization '{name}'"),
            Self::User(name) => write!(f, "user '{name}'"),
        }
    }
}

/// Body of `POST /user/repos` and `POST /org/:org/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRepoOption {
    pub name: String,
    pub description: String,
    pub private: bool,
}

impl CreateRepoOption {
    /// Describe the Gogs counterpart of a GitLab project.
    ///
    /// Anything that is not explicitly public stays private.
    pub fn for_project(project: &GitLabProject) -> Self {
        Self {
            name: project.path.clone(),
            description: project.description.clone().unwrap_or_default(),
            private: !project.is_public(),
        }
    }
}

/// A Gogs repository as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GogsRepository {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub private: Option<bool>,
}

impl GogsRepository {
    /// Minimal record used when the server reports the repository already exists.
    pub fn existing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: None,
            private: None,
        }
    }
}
